use crate::{
    ApiError, create_assignment, create_engineer, create_project, delete_assignment,
    delete_engineer, delete_project, get_assignment, get_engineer, get_engineer_capacity,
    get_project, health, list_assignments, list_engineers, list_projects,
    list_suitable_engineers, update_assignment, update_engineer, update_project,
};

use erm_service::AppState;

use std::panic::Location;

use axum::{Router, routing::get};
use error_location::ErrorLocation;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Engineers
        .route("/api/engineers", get(list_engineers).post(create_engineer))
        .route(
            "/api/engineers/{id}",
            get(get_engineer).put(update_engineer).delete(delete_engineer),
        )
        .route("/api/engineers/{id}/capacity", get(get_engineer_capacity))
        // Projects
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route(
            "/api/projects/{id}/suitable-engineers",
            get(list_suitable_engineers),
        )
        // Assignments
        .route("/api/assignments", get(list_assignments).post(create_assignment))
        .route(
            "/api/assignments/{id}",
            get(get_assignment)
                .put(update_assignment)
                .delete(delete_assignment),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .fallback(route_not_found)
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound {
        message: "Route not found".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
