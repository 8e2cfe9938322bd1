//! Login session management
//!
//! A session is an opaque random token handed to the browser in the
//! `session` cookie. Only its SHA-256 digest is stored, so a leaked
//! `sessions` table cannot be replayed.

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use common::error::DatabaseResult;
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::{
    middleware::CurrentUser, models::NewSession, repositories::SessionRepository, settings,
};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session";

const TOKEN_BYTES: usize = 32;
const MAX_TTL_SECONDS: u64 = 10 * 365 * 24 * 3600;

/// Session manager for handling login sessions in the database
#[derive(Clone)]
pub struct SessionManager {
    repository: SessionRepository,
    ttl: Duration,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(repository: SessionRepository, ttl_seconds: u64) -> Self {
        Self {
            repository,
            ttl: Duration::seconds(ttl_seconds.min(MAX_TTL_SECONDS) as i64),
        }
    }

    /// Create a new session for a user and return the raw token
    pub async fn create_session(&self, user_id: i64) -> DatabaseResult<String> {
        info!("Creating session for user: {}", user_id);

        let token = generate_token();
        self.repository
            .create(&NewSession {
                user_id,
                token_hash: hash_token(&token),
                expires_at: Utc::now() + self.ttl,
            })
            .await?;

        Ok(token)
    }

    /// Resolve a raw token to the user it authenticates
    ///
    /// Unknown and expired tokens both resolve to `None`.
    pub async fn resolve(&self, token: &str) -> DatabaseResult<Option<CurrentUser>> {
        let session = self.repository.find_by_token_hash(&hash_token(token)).await?;

        Ok(session
            .filter(|session| session.is_valid_at(Utc::now()))
            .map(|session| CurrentUser {
                id: session.user_id,
                username: session.username,
                session_id: session.session_id,
            }))
    }

    /// Delete a session
    pub async fn delete_session(&self, session_id: i64) -> DatabaseResult<()> {
        info!("Deleting session: {}", session_id);

        self.repository.delete(session_id).await?;
        Ok(())
    }

    /// Cleanup expired sessions
    pub async fn cleanup_expired_sessions(&self) -> DatabaseResult<u64> {
        let removed = self.repository.delete_expired(Utc::now()).await?;
        if removed > 0 {
            info!("Removed {} expired sessions", removed);
        }
        Ok(removed)
    }

    /// Session lifetime in whole seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

/// Generate a fresh hex-encoded session token
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Digest stored in place of the raw token
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// Build the cookie that hands `token` to the browser
pub fn session_cookie(
    token: String,
    ttl_seconds: i64,
    config: &settings::Session,
) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(time::Duration::seconds(ttl_seconds))
        .build()
}

/// Cookie matching the session cookie's path, for removal from the jar
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
