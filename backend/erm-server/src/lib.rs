pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod seed;


pub use api::{
    assignments::{
        assignment_dto::{AssignedEngineerDto, AssignedProjectDto, AssignmentDto},
        assignments::{
            create_assignment, delete_assignment, get_assignment, list_assignments,
            update_assignment,
        },
        create_assignment_request::CreateAssignmentRequest,
        update_assignment_request::UpdateAssignmentRequest,
    },
    delete_response::DeleteResponse,
    engineers::{
        capacity_query::CapacityQuery,
        create_engineer_request::CreateEngineerRequest,
        engineer_dto::{CapacityDto, EngineerAssignmentDto, EngineerDto, EngineerOverviewDto},
        engineers::{
            create_engineer, delete_engineer, get_engineer, get_engineer_capacity,
            list_engineers, update_engineer,
        },
        update_engineer_request::UpdateEngineerRequest,
    },
    envelope::ApiResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_json::ApiJson,
    extractors::request_caller::{RequestCaller, USER_ID_HEADER, USER_ROLE_HEADER},
    parse_id,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::{ProjectDto, SuitableEngineerDto},
        projects::{
            create_project, delete_project, get_project, list_projects, list_suitable_engineers,
            update_project,
        },
        update_project_request::UpdateProjectRequest,
    },
};

pub use crate::routes::build_router;
