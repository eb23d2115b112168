//! Engineer REST API handlers

use crate::{
    ApiJson, ApiResponse, ApiResult, CapacityDto, CapacityQuery, CreateEngineerRequest,
    DeleteResponse, EngineerDto, EngineerOverviewDto, RequestCaller, UpdateEngineerRequest,
    parse_id,
};

use erm_core::{AllocationPolicy, EngineerPatch, Seniority};
use erm_service::{AppState, EngineerService, NewEngineer};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};

const DEFAULT_MAX_CAPACITY: i32 = 100;

/// GET /api/engineers
///
/// Every engineer with current allocation under the configured display policy
pub async fn list_engineers(
    State(state): State<AppState>,
    RequestCaller(_caller): RequestCaller,
) -> ApiResult<Json<ApiResponse<Vec<EngineerOverviewDto>>>> {
    let overviews = EngineerService::list(&state, state.display_policy).await?;

    Ok(Json(ApiResponse::list(
        overviews.into_iter().map(EngineerOverviewDto::from).collect(),
    )))
}

/// GET /api/engineers/{id}
pub async fn get_engineer(
    State(state): State<AppState>,
    RequestCaller(_caller): RequestCaller,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<EngineerOverviewDto>>> {
    let engineer_id = parse_id(&id, "id")?;
    let overview = EngineerService::get(&state, engineer_id, state.display_policy).await?;

    Ok(Json(ApiResponse::ok(overview.into())))
}

/// GET /api/engineers/{id}/capacity?policy=active_projects|all
pub async fn get_engineer_capacity(
    State(state): State<AppState>,
    RequestCaller(_caller): RequestCaller,
    Path(id): Path<String>,
    query: Result<Query<CapacityQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<CapacityDto>>> {
    let engineer_id = parse_id(&id, "id")?;
    let Query(query) = query?;
    let policy = match query.policy.as_deref() {
        Some(policy) => AllocationPolicy::from_str(policy)?,
        None => state.display_policy,
    };

    let overview = EngineerService::get(&state, engineer_id, policy).await?;

    Ok(Json(ApiResponse::ok(overview.into())))
}

/// POST /api/engineers
pub async fn create_engineer(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    ApiJson(req): ApiJson<CreateEngineerRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<EngineerDto>>)> {
    let seniority = match req.seniority.as_deref() {
        Some(value) => Seniority::from_str(value)?,
        None => Seniority::Mid,
    };

    let input = NewEngineer {
        name: req.name,
        email: req.email,
        skills: req.skills,
        seniority,
        max_capacity: req.max_capacity.unwrap_or(DEFAULT_MAX_CAPACITY),
        department: req.department.unwrap_or_default(),
    };
    let engineer = EngineerService::create(&state, &caller, input).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(engineer.into()))))
}

/// PUT /api/engineers/{id}
pub async fn update_engineer(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateEngineerRequest>,
) -> ApiResult<Json<ApiResponse<EngineerDto>>> {
    let engineer_id = parse_id(&id, "id")?;
    let seniority = req.seniority.as_deref().map(Seniority::from_str).transpose()?;

    let patch = EngineerPatch {
        name: req.name,
        email: req.email,
        skills: req.skills,
        seniority,
        max_capacity: req.max_capacity,
        department: req.department,
    };
    let engineer = EngineerService::update(&state, &caller, engineer_id, patch).await?;

    Ok(Json(ApiResponse::ok(engineer.into())))
}

/// DELETE /api/engineers/{id}
///
/// Also removes every assignment the engineer holds
pub async fn delete_engineer(
    State(state): State<AppState>,
    RequestCaller(caller): RequestCaller,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<DeleteResponse>>> {
    let engineer_id = parse_id(&id, "id")?;
    let removed = EngineerService::delete(&state, &caller, engineer_id).await?;

    Ok(Json(ApiResponse::ok(DeleteResponse {
        id: engineer_id.to_string(),
        removed_assignments: Some(removed),
    })))
}
