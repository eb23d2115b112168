pub mod allocation_validator;
pub mod assignment_service;
pub mod engineer_service;
pub mod project_service;

use crate::{AppState, Result as ServiceErrorResult, ServiceError};

use sqlx::{Sqlite, Transaction};

/// Write transactions take SQLite's write lock up front. A deferred transaction that
/// reads first could fail to upgrade when another connection committed in between.
pub(crate) async fn begin_write(
    state: &AppState,
) -> ServiceErrorResult<Transaction<'static, Sqlite>> {
    Ok(state.pool.begin_with("BEGIN IMMEDIATE").await?)
}

/// Trimmed value of a required text field.
#[track_caller]
pub(crate) fn require_text(value: &str, field: &str) -> ServiceErrorResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(
            format!("{field} is required"),
            Some(field),
        ));
    }
    Ok(trimmed.to_string())
}
