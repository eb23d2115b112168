#![allow(dead_code)]

//! Test infrastructure for erm-server API tests

use erm_auth::Caller;
use erm_core::{AllocationPolicy, UserRole};
use erm_db::open_memory_pool;
use erm_server::{USER_ID_HEADER, USER_ROLE_HEADER, build_router};
use erm_service::AppState;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const MANAGER_ID: &str = "00000000-0000-4000-8000-000000000001";

/// Create AppState for testing: migrated in-memory database, dev auth as a manager
pub async fn create_test_app_state() -> AppState {
    let pool = open_memory_pool()
        .await
        .expect("Failed to create test database");
    let dev_caller = Caller::new(Uuid::parse_str(MANAGER_ID).unwrap(), UserRole::Manager);

    AppState::new(pool, dev_caller, AllocationPolicy::ActiveProjects)
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_as(state, method, uri, body, &[]).await
}

/// Like `send`, with extra request headers
pub async fn send_as(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    (status, json)
}

/// Headers identifying an engineer-role caller
pub fn engineer_headers(user_id: &str) -> [(&'static str, &str); 2] {
    [(USER_ID_HEADER, user_id), (USER_ROLE_HEADER, "engineer")]
}

/// Create an engineer through the API and return its id
pub async fn create_engineer(state: &AppState, email: &str, skills: &[&str], max_capacity: i32) -> String {
    let (status, json) = send(
        state,
        "POST",
        "/api/engineers",
        Some(json!({
            "name": format!("Engineer {}", email),
            "email": email,
            "skills": skills,
            "seniority": "senior",
            "maxCapacity": max_capacity,
            "department": "Engineering",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create engineer failed: {json}");
    json["data"]["id"].as_str().unwrap().to_string()
}

/// Create a project through the API and return its id
pub async fn create_project(
    state: &AppState,
    start: &str,
    end: &str,
    skills: &[&str],
    status: &str,
) -> String {
    let (code, json) = send(
        state,
        "POST",
        "/api/projects",
        Some(json!({
            "name": "Platform Rebuild",
            "description": "Replace the legacy platform",
            "startDate": start,
            "endDate": end,
            "requiredSkills": skills,
            "teamSize": 4,
            "status": status,
        })),
    )
    .await;
    assert_eq!(code, StatusCode::CREATED, "create project failed: {json}");
    json["data"]["id"].as_str().unwrap().to_string()
}

/// Book an engineer on a project through the API
pub async fn book(
    state: &AppState,
    engineer_id: &str,
    project_id: &str,
    allocation: i32,
    start: &str,
    end: &str,
) -> (StatusCode, Value) {
    send(
        state,
        "POST",
        "/api/assignments",
        Some(json!({
            "engineerId": engineer_id,
            "projectId": project_id,
            "allocationPercentage": allocation,
            "startDate": start,
            "endDate": end,
            "role": "Developer",
        })),
    )
    .await
}
