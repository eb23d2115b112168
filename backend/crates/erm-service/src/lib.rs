pub mod app_state;
pub mod engineer_locks;
pub mod error;
pub mod metrics;
pub mod services;

pub use app_state::AppState;
pub use engineer_locks::{EngineerGuard, EngineerLocks};
pub use error::{Result, ServiceError};
pub use metrics::Metrics;
pub use services::allocation_validator::AllocationValidator;
pub use services::assignment_service::{AssignmentService, NewAssignment};
pub use services::engineer_service::{EngineerOverview, EngineerService, NewEngineer};
pub use services::project_service::{NewProject, ProjectService, SuitableEngineer};
