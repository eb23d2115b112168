pub mod capacity_query;
pub mod create_engineer_request;
pub mod engineer_dto;
pub mod engineers;
pub mod update_engineer_request;
