pub mod assignment_dto;
pub mod assignments;
pub mod create_assignment_request;
pub mod update_assignment_request;
