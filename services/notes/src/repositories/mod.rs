//! Repositories for database operations

pub mod note;
pub mod session;
pub mod user;

pub use note::NoteRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
