//! Multi-user note taking web service
//!
//! Users register, log in with a cookie-backed session and manage their own
//! notes. Every note query is scoped to the logged-in user.

pub mod error;
pub mod flash;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod settings;
pub mod state;
pub mod validation;
pub mod views;

pub use routes::create_router;
pub use settings::Settings;
pub use state::AppState;
