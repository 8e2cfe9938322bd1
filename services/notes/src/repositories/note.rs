//! Note repository for database operations
//!
//! Every lookup and mutation is keyed by both the note ID and the owning
//! user ID, so a note belonging to someone else behaves exactly like a note
//! that does not exist.

use chrono::Utc;
use common::error::DatabaseResult;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{Note, NoteFields};

/// Note repository for database operations
#[derive(Clone)]
pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    /// Create a new note repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all notes owned by a user, in insertion order
    pub async fn list_for_user(&self, user_id: i64) -> DatabaseResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, user_id, created_at, updated_at
            FROM notes
            WHERE user_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    /// Create a note owned by `user_id`
    pub async fn create(&self, user_id: i64, fields: &NoteFields) -> DatabaseResult<Note> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (title, content, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, content, user_id, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.content)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Created note {} for user {}", note.id, user_id);
        Ok(note)
    }

    /// Get a note by ID if it belongs to `user_id`
    pub async fn find_for_user(&self, id: i64, user_id: i64) -> DatabaseResult<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, content, user_id, created_at, updated_at
            FROM notes
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    /// Overwrite the title and content of a note owned by `user_id`
    ///
    /// Returns `None` when no such note exists for that owner.
    pub async fn update_for_user(
        &self,
        id: i64,
        user_id: i64,
        fields: &NoteFields,
    ) -> DatabaseResult<Option<Note>> {
        let mut tx = self.pool.begin().await?;

        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = ?, content = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            RETURNING id, title, content, user_id, created_at, updated_at
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.content)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        if note.is_some() {
            info!("Updated note {} for user {}", id, user_id);
        }
        Ok(note)
    }

    /// Delete a note owned by `user_id`
    ///
    /// Returns false when nothing was deleted.
    pub async fn delete_for_user(&self, id: i64, user_id: i64) -> DatabaseResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted note {} for user {}", id, user_id);
        }
        Ok(deleted)
    }
}
