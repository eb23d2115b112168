//! Store-backed conflict validation.
//!
//! Loads the engineer and their assignments through the caller's connection, so a
//! check made inside a transaction sees exactly the state that transaction will
//! write against. Callers hold the engineer's lock from `EngineerLocks` for the whole
//! load-validate-write sequence.

use crate::{Result as ServiceErrorResult, ServiceError};

use erm_core::{CapacityCheck, CapacityRequest, DateRange, Engineer, check_capacity};
use erm_db::{AssignmentRepository, EngineerRepository};

use log::{debug, info};
use sqlx::SqliteConnection;
use uuid::Uuid;

pub struct AllocationValidator;

impl AllocationValidator {
    /// Would booking `allocation` over `window` keep the engineer within their ceiling?
    ///
    /// `exclude` names the assignment being modified, if any.
    pub async fn validate_capacity(
        conn: &mut SqliteConnection,
        engineer_id: Uuid,
        allocation: i32,
        window: DateRange,
        exclude: Option<Uuid>,
    ) -> ServiceErrorResult<CapacityCheck> {
        let engineer = EngineerRepository::find_by_id(&mut *conn, engineer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Engineer", engineer_id))?;

        let request = CapacityRequest {
            allocation,
            window,
            exclude,
        };
        Self::validate_for(conn, &engineer, &request).await
    }

    /// Same check for an engineer the caller has already loaded.
    pub async fn validate_for(
        conn: &mut SqliteConnection,
        engineer: &Engineer,
        request: &CapacityRequest,
    ) -> ServiceErrorResult<CapacityCheck> {
        let existing = AssignmentRepository::find_by_engineer(&mut *conn, engineer.id).await?;

        match check_capacity(engineer, &existing, request) {
            Ok(check) => {
                debug!(
                    "Capacity ok for engineer {}: {} + {} <= {}",
                    engineer.id, check.overlapping_allocation, check.requested, check.max_capacity
                );
                Ok(check)
            }
            Err(err) => {
                info!(
                    "Capacity rejected for engineer {} over {}..{}: {}",
                    engineer.id,
                    request.window.start,
                    request.window.end,
                    err.user_message()
                );
                Err(err.into())
            }
        }
    }
}
