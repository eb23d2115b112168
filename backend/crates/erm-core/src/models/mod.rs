pub mod assignment;
pub mod calendar;
pub mod engineer;
pub mod manager;
pub mod project;
pub mod project_status;
pub mod seniority;
pub mod skill_set;
pub mod user_role;
