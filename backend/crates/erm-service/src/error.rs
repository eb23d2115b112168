use erm_auth::AuthError;
use erm_core::CoreError;
use erm_db::{DbError, USER_EMAIL_COLUMN};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error(
        "Capacity exceeded: {current} + {requested} > {max_capacity} {location}"
    )]
    CapacityExceeded {
        current: i32,
        requested: i32,
        max_capacity: i32,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database error: {source}")]
    Database { source: DbError },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Database { .. } | Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Message for the response body. Storage and internal failures are not
    /// described to the client.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { entity, .. } => format!("{entity} not found"),
            Self::Validation { message, .. } => message.clone(),
            Self::CapacityExceeded {
                current,
                requested,
                max_capacity,
                ..
            } => format!(
                "Engineer does not have enough capacity for this assignment: \
                 {current} + {requested} = {} > {max_capacity} (available: {})",
                current + requested,
                (max_capacity - current).max(0)
            ),
            Self::Unauthorized { message, .. } | Self::Forbidden { message, .. } => {
                message.clone()
            }
            Self::Database { .. } | Self::Internal { .. } => "Server error".to_string(),
        }
    }

    pub fn field(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } => field.clone(),
            Self::CapacityExceeded { .. } => Some("allocationPercentage".to_string()),
            _ => None,
        }
    }
}

impl From<CoreError> for ServiceError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CapacityExceeded {
                current,
                requested,
                max_capacity,
                location,
            } => Self::CapacityExceeded {
                current,
                requested,
                max_capacity,
                location,
            },
            other => Self::Validation {
                message: other.user_message(),
                field: other.field(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        if err.is_unique_violation_on(USER_EMAIL_COLUMN) {
            return Self::Validation {
                message: "User with this email already exists".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            };
        }
        Self::Database { source: err }
    }
}

impl From<sqlx::Error> for ServiceError {
    #[track_caller]
    fn from(err: sqlx::Error) -> Self {
        Self::from(DbError::from(err))
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_forbidden() {
            Self::Forbidden {
                message: err.user_message(),
                location,
            }
        } else {
            Self::Unauthorized {
                message: err.user_message(),
                location,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
