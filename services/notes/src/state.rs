//! Application state shared across handlers

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::{
    repositories::{NoteRepository, SessionRepository, UserRepository},
    session::SessionManager,
    settings::Settings,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub user_repository: UserRepository,
    pub note_repository: NoteRepository,
    pub session_manager: SessionManager,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wire repositories and the session manager around one pool
    pub fn new(pool: SqlitePool, settings: Settings) -> Self {
        let session_manager = SessionManager::new(
            SessionRepository::new(pool.clone()),
            settings.session.ttl_seconds,
        );

        Self {
            user_repository: UserRepository::new(pool.clone()),
            note_repository: NoteRepository::new(pool.clone()),
            session_manager,
            settings: Arc::new(settings),
            db_pool: pool,
        }
    }
}
