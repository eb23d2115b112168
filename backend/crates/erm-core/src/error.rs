use crate::SUPPORTED_YEARS;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid date range: start {start} must be before end {end} {location}")]
    InvalidDateRange {
        start: NaiveDate,
        end: NaiveDate,
        location: ErrorLocation,
    },

    #[error("Date {date} is outside the supported range {location}")]
    DateOutOfRange {
        date: NaiveDate,
        location: ErrorLocation,
    },

    #[error(
        "Assignment dates {start}..{end} must be within project dates {project_start}..{project_end} {location}"
    )]
    OutsideProjectWindow {
        start: NaiveDate,
        end: NaiveDate,
        project_start: NaiveDate,
        project_end: NaiveDate,
        location: ErrorLocation,
    },

    #[error(
        "Engineer does not have enough capacity: {current} + {requested} = {} > {max_capacity} {location}",
        .current + .requested
    )]
    CapacityExceeded {
        current: i32,
        requested: i32,
        max_capacity: i32,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid seniority: {value} {location}")]
    InvalidSeniority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid user role: {value} {location}")]
    InvalidUserRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid allocation policy: {value} {location}")]
    InvalidAllocationPolicy {
        value: String,
        location: ErrorLocation,
    },

    #[error("UUID parse error in {field}: {source} {location}")]
    Uuid {
        field: String,
        source: uuid::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Message suitable for an end user, without the source location suffix.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidDateRange { start, end, .. } => {
                format!("End date must be after start date (start: {start}, end: {end})")
            }
            Self::DateOutOfRange { date, .. } => format!(
                "Date {date} is outside the supported years ({} to {})",
                SUPPORTED_YEARS.start(),
                SUPPORTED_YEARS.end()
            ),
            Self::OutsideProjectWindow {
                project_start,
                project_end,
                ..
            } => format!(
                "Assignment dates must be within project dates ({project_start} to {project_end})"
            ),
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
            Self::InvalidProjectStatus { value, .. } => format!("Invalid project status: {value}"),
            Self::InvalidSeniority { value, .. } => format!("Invalid seniority: {value}"),
            Self::InvalidUserRole { value, .. } => format!("Invalid user role: {value}"),
            Self::InvalidAllocationPolicy { value, .. } => {
                format!("Invalid allocation policy: {value}")
            }
            Self::Uuid { field, source, .. } => format!("Invalid UUID in {field}: {source}"),
        }
    }

    /// Field the error refers to, when there is one.
    pub fn field(&self) -> Option<String> {
        match self {
            Self::Validation { field, .. } => field.clone(),
            Self::InvalidDateRange { .. }
            | Self::DateOutOfRange { .. }
            | Self::OutsideProjectWindow { .. } => {
                Some("startDate".to_string())
            }
            Self::CapacityExceeded { .. } => Some("allocationPercentage".to_string()),
            Self::InvalidProjectStatus { .. } => Some("status".to_string()),
            Self::InvalidSeniority { .. } => Some("seniority".to_string()),
            Self::InvalidUserRole { .. } => Some("role".to_string()),
            Self::InvalidAllocationPolicy { .. } => Some("policy".to_string()),
            Self::Uuid { field, .. } => Some(field.clone()),
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
