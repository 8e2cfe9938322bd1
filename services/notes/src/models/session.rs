//! Session model and related functionality

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Session entity
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// New session creation payload
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}

/// A session joined with the user it belongs to
#[derive(Debug, Clone, FromRow)]
pub struct ActiveSession {
    pub session_id: i64,
    pub user_id: i64,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

impl ActiveSession {
    /// Whether the session is still usable at `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
