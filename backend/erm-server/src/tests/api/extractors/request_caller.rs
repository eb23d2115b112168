use crate::{ApiError, RequestCaller, USER_ID_HEADER, USER_ROLE_HEADER};

use erm_auth::{Caller, Claims, JwtValidator};
use erm_core::{AllocationPolicy, UserRole};
use erm_db::open_memory_pool;
use erm_service::AppState;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes-long";

async fn create_test_state() -> AppState {
    let pool = open_memory_pool()
        .await
        .expect("Failed to create test pool");
    let dev_caller = Caller::new(
        Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
        UserRole::Manager,
    );
    AppState::new(pool, dev_caller, AllocationPolicy::ActiveProjects)
}

fn token_for(user_id: Uuid, role: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.to_string(),
        exp: now + 3600,
        iat: now,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
}

async fn extract(state: &AppState, request: Request<Body>) -> Result<RequestCaller, ApiError> {
    let (mut parts, _body) = request.into_parts();
    RequestCaller::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_dev_mode_without_headers_uses_dev_user() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let RequestCaller(caller) = extract(&state, request).await.unwrap();

    assert_that!(caller, eq(state.dev_caller));
}

#[tokio::test]
async fn test_dev_mode_honours_identity_headers() {
    let state = create_test_state().await;
    let user_id = Uuid::new_v4();
    let request = Request::builder()
        .header(USER_ID_HEADER, user_id.to_string())
        .header(USER_ROLE_HEADER, "engineer")
        .body(Body::empty())
        .unwrap();

    let RequestCaller(caller) = extract(&state, request).await.unwrap();

    assert_that!(caller.user_id, eq(user_id));
    assert_that!(caller.role, eq(UserRole::Engineer));
}

#[tokio::test]
async fn test_dev_mode_role_header_alone_keeps_dev_user_id() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(USER_ROLE_HEADER, "engineer")
        .body(Body::empty())
        .unwrap();

    let RequestCaller(caller) = extract(&state, request).await.unwrap();

    assert_that!(caller.user_id, eq(state.dev_caller.user_id));
    assert_that!(caller.role, eq(UserRole::Engineer));
}

#[tokio::test]
async fn test_dev_mode_rejects_malformed_user_id() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(USER_ID_HEADER, "not-a-valid-uuid")
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_dev_mode_rejects_unknown_role() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(USER_ROLE_HEADER, "admin")
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_jwt_mode_requires_bearer_token() {
    let state = create_test_state()
        .await
        .with_jwt_validator(Arc::new(JwtValidator::with_hs256(SECRET)));
    let request = Request::builder()
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_jwt_mode_accepts_valid_token() {
    let state = create_test_state()
        .await
        .with_jwt_validator(Arc::new(JwtValidator::with_hs256(SECRET)));
    let user_id = Uuid::new_v4();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token_for(user_id, "manager")))
        .body(Body::empty())
        .unwrap();

    let RequestCaller(caller) = extract(&state, request).await.unwrap();

    assert_that!(caller.user_id, eq(user_id));
    assert_that!(caller.role, eq(UserRole::Manager));
}

#[tokio::test]
async fn test_jwt_mode_rejects_token_signed_with_other_secret() {
    let state = create_test_state()
        .await
        .with_jwt_validator(Arc::new(JwtValidator::with_hs256(
            b"a-completely-different-secret-of-32-bytes",
        )));
    let request = Request::builder()
        .header(
            "Authorization",
            format!("Bearer {}", token_for(Uuid::new_v4(), "manager")),
        )
        .body(Body::empty())
        .unwrap();

    let result = extract(&state, request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
