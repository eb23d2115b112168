pub mod assignment_repository;
pub mod engineer_repository;
pub mod project_repository;
mod row_decode;
pub mod user_repository;
