//! Session repository for database operations

use chrono::{DateTime, Utc};
use common::error::DatabaseResult;
use sqlx::SqlitePool;

use crate::models::{ActiveSession, NewSession, Session};

/// Session repository for database operations
#[derive(Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    /// Create a new session repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new session
    pub async fn create(&self, new_session: &NewSession) -> DatabaseResult<Session> {
        let mut tx = self.pool.begin().await?;

        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id, token_hash, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, token_hash, expires_at, created_at
            "#,
        )
        .bind(new_session.user_id)
        .bind(&new_session.token_hash)
        .bind(new_session.expires_at)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(session)
    }

    /// Find the session for a token hash, joined with its user
    ///
    /// Expiry is not checked here.
    pub async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> DatabaseResult<Option<ActiveSession>> {
        let session = sqlx::query_as::<_, ActiveSession>(
            r#"
            SELECT sessions.id AS session_id, users.id AS user_id, users.username, sessions.expires_at
            FROM sessions
            JOIN users ON users.id = sessions.user_id
            WHERE sessions.token_hash = ?
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(session)
    }

    /// Delete a session by ID
    pub async fn delete(&self, session_id: i64) -> DatabaseResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(session_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every session that expired at or before `now`
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> DatabaseResult<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }
}
