//! Notes service models

pub mod note;
pub mod session;
pub mod user;

// Re-export for convenience
pub use note::{Note, NoteFields};
pub use session::{ActiveSession, NewSession, Session};
pub use user::{Credentials, NewUser, User};
