//! REST API error types
//!
//! Every error leaves the server as the standard envelope
//! `{ success: false, error, code, field? }` with a matching HTTP status.

use erm_auth::AuthError;
use erm_core::CoreError;
use erm_db::DbError;
use erm_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    /// Human-readable reason
    pub error: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "CAPACITY_EXCEEDED")
    pub code: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Booking would push an engineer over their ceiling (400)
    #[error("Capacity exceeded: {message} {location}")]
    CapacityExceeded {
        message: String,
        location: ErrorLocation,
    },

    /// No usable identity (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Identity known but not allowed (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::CapacityExceeded { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::info!("{}", self),
        }

        let status = self.status();
        let code = self.code().to_string();
        let (error, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::NotFound { message, .. }
            | ApiError::CapacityExceeded { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            success: false,
            error,
            code,
            field,
        };
        (status, Json(body)).into_response()
    }
}

/// Convert service errors to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let message = e.user_message();

        match e {
            ServiceError::NotFound { .. } => ApiError::NotFound { message, location },
            ServiceError::Validation { field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            ServiceError::CapacityExceeded { .. } => {
                ApiError::CapacityExceeded { message, location }
            }
            ServiceError::Unauthorized { .. } => ApiError::Unauthorized { message, location },
            ServiceError::Forbidden { .. } => ApiError::Forbidden { message, location },
            ServiceError::Database { ref source } => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", source);
                ApiError::Internal { message, location }
            }
            ServiceError::Internal { .. } => {
                log::error!("{}", e);
                ApiError::Internal { message, location }
            }
        }
    }
}

/// Convert request-shape errors from the domain (bad dates, enum values, ids)
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::from(ServiceError::from(e))
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::from(ServiceError::from(e))
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        ApiError::from(ServiceError::from(e))
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation {
            message: format!("Invalid request body: {}", e.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(e: QueryRejection) -> Self {
        ApiError::Validation {
            message: format!("Invalid query string: {}", e.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
