use crate::ApiError;

use erm_core::{CoreError, ErrorLocation};
use erm_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_envelope() {
    let error = ApiError::from(ServiceError::not_found("Engineer", "abc"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Engineer not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "name is required".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn test_capacity_exceeded_returns_400_with_arithmetic() {
    let core = CoreError::CapacityExceeded {
        current: 50,
        requested: 60,
        max_capacity: 100,
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(core)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "CAPACITY_EXCEEDED");
    assert_that!(
        json["error"].as_str().unwrap(),
        contains_substring("50 + 60 = 110 > 100")
    );
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::from(ServiceError::forbidden("Not authorized to update this project"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Authentication required".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, _json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_internal_error_returns_500_without_details() {
    let error = ApiError::from(ServiceError::Internal {
        message: "disk on fire".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "Server error");
}

#[test]
fn test_invalid_date_converts_to_validation() {
    let core = erm_core::parse_calendar_date("31/12/2024", "startDate").unwrap_err();

    let error = ApiError::from(core);

    assert!(matches!(
        error,
        ApiError::Validation { ref field, .. } if field.as_deref() == Some("startDate")
    ));
}
