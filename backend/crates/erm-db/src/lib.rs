pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database_pool::{open_file_pool, open_memory_pool, ping, run_migrations};
pub use error::{DbError, Result, USER_EMAIL_COLUMN};
pub use repositories::assignment_repository::AssignmentRepository;
pub use repositories::engineer_repository::EngineerRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::user_repository::UserRepository;
