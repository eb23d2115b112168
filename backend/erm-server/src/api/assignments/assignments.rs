//! Assignment REST API handlers
//!
//! Create and update run the full date and capacity validation in the service layer;
//! a rejected booking answers 400 with the arithmetic that failed.

use crate::{
    ApiJson, ApiResponse, ApiResult, AssignmentDto, CreateAssignmentRequest, DeleteResponse,
    RequestCaller, UpdateAssignmentRequest, parse_id,
};

use erm_core::{AssignmentPatch, parse_calendar_date};
use erm_service::{AppState, AssignmentService, NewAssignment};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// GET /api/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    RequestCaller(_caller): RequestCaller,
) -> ApiResult<Json<ApiResponse<Vec<AssignmentDto>>>> {
    let assignments = AssignmentService::list(&state).await?;

    Ok(Json(ApiResponse::list(
        assignments.into_iter().map(AssignmentDto::from).collect(),
    )))
}

/// GET /api/assignments/{id}
pub async fn get_assignment(
    State(state): State<AppState>,
    RequestCaller(_caller): RequestCaller,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<AssignmentDto>>> {
    let assignment_id = parse_id(&id, "id")?;
    let details = AssignmentService::get(&state, assignment_id).await?;

    Ok(Json(ApiResponse::ok(details.into())))
}

/// POST /api/assignments
pub async fn create_assignment(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    ApiJson(req): ApiJson<CreateAssignmentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<AssignmentDto>>)> {
    let input = NewAssignment {
        engineer_id: parse_id(&req.engineer_id, "engineerId")?,
        project_id: parse_id(&req.project_id, "projectId")?,
        allocation_percentage: req.allocation_percentage,
        start_date: parse_calendar_date(&req.start_date, "startDate")?,
        end_date: parse_calendar_date(&req.end_date, "endDate")?,
        role: req.role,
    };

    log::debug!(
        "Create assignment: engineer={}, project={}, allocation={}%",
        input.engineer_id,
        input.project_id,
        input.allocation_percentage
    );

    let details = AssignmentService::create(&state, &caller, input).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(details.into()))))
}

/// PUT /api/assignments/{id}
pub async fn update_assignment(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateAssignmentRequest>,
) -> ApiResult<Json<ApiResponse<AssignmentDto>>> {
    let assignment_id = parse_id(&id, "id")?;

    let patch = AssignmentPatch {
        allocation_percentage: req.allocation_percentage,
        start_date: req
            .start_date
            .as_deref()
            .map(|value| parse_calendar_date(value, "startDate"))
            .transpose()?,
        end_date: req
            .end_date
            .as_deref()
            .map(|value| parse_calendar_date(value, "endDate"))
            .transpose()?,
        role: req.role,
    };
    let details = AssignmentService::update(&state, &caller, assignment_id, patch).await?;

    Ok(Json(ApiResponse::ok(details.into())))
}

/// DELETE /api/assignments/{id}
pub async fn delete_assignment(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<DeleteResponse>>> {
    let assignment_id = parse_id(&id, "id")?;
    AssignmentService::delete(&state, &caller, assignment_id).await?;

    Ok(Json(ApiResponse::ok(DeleteResponse {
        id: assignment_id.to_string(),
        removed_assignments: None,
    })))
}
