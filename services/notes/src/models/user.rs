//! User model and related functionality

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User entity
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// New user creation payload
///
/// The password is hashed before this is built; cleartext never reaches the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Username and password accepted by a validated login or registration form
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
