//! Project REST API handlers

use crate::{
    ApiJson, ApiResponse, ApiResult, CreateProjectRequest, DeleteResponse, ProjectDto,
    RequestCaller, SuitableEngineerDto, UpdateProjectRequest, parse_id,
};

use erm_core::{ProjectPatch, ProjectStatus, parse_calendar_date};
use erm_service::{AppState, NewProject, ProjectService};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const DEFAULT_TEAM_SIZE: i32 = 1;

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    RequestCaller(_caller): RequestCaller,
) -> ApiResult<Json<ApiResponse<Vec<ProjectDto>>>> {
    let projects = ProjectService::list(&state).await?;

    Ok(Json(ApiResponse::list(
        projects.into_iter().map(ProjectDto::from).collect(),
    )))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    RequestCaller(_caller): RequestCaller,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<ProjectDto>>> {
    let project_id = parse_id(&id, "id")?;
    let project = ProjectService::get(&state, project_id).await?;

    Ok(Json(ApiResponse::ok(project.into())))
}

/// POST /api/projects
///
/// The calling manager becomes the owner
pub async fn create_project(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<ProjectDto>>)> {
    let status = match req.status.as_deref() {
        Some(value) => ProjectStatus::from_str(value)?,
        None => ProjectStatus::default(),
    };

    let input = NewProject {
        name: req.name,
        description: req.description,
        start_date: parse_calendar_date(&req.start_date, "startDate")?,
        end_date: parse_calendar_date(&req.end_date, "endDate")?,
        required_skills: req.required_skills,
        team_size: req.team_size.unwrap_or(DEFAULT_TEAM_SIZE),
        status,
    };
    let project = ProjectService::create(&state, &caller, input).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(project.into()))))
}

/// PUT /api/projects/{id}
///
/// Owning manager only
pub async fn update_project(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateProjectRequest>,
) -> ApiResult<Json<ApiResponse<ProjectDto>>> {
    let project_id = parse_id(&id, "id")?;

    let patch = ProjectPatch {
        name: req.name,
        description: req.description,
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
        required_skills: req.required_skills,
        team_size: req.team_size,
        status: req.status.as_deref().map(ProjectStatus::from_str).transpose()?,
    };
    let project = ProjectService::update(&state, &caller, project_id, patch).await?;

    Ok(Json(ApiResponse::ok(project.into())))
}

/// DELETE /api/projects/{id}
///
/// Owning manager only; removes the project's assignments too
pub async fn delete_project(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<DeleteResponse>>> {
    let project_id = parse_id(&id, "id")?;
    let removed = ProjectService::delete(&state, &caller, project_id).await?;

    Ok(Json(ApiResponse::ok(DeleteResponse {
        id: project_id.to_string(),
        removed_assignments: Some(removed),
    })))
}

/// GET /api/projects/{id}/suitable-engineers
pub async fn list_suitable_engineers(
    State(state): State<AppState>,
    RequestCaller(_caller): RequestCaller,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<SuitableEngineerDto>>>> {
    let project_id = parse_id(&id, "id")?;
    let suitable = ProjectService::suitable_engineers(&state, project_id).await?;

    Ok(Json(ApiResponse::list(
        suitable.into_iter().map(SuitableEngineerDto::from).collect(),
    )))
}
