//! Assignment lifecycle: create, update, delete and read.
//!
//! Every capacity-affecting mutation runs the same sequence under the engineer's
//! lock: load, validate dates, validate capacity, write, commit. A rejected request
//! leaves no trace in the store.

use crate::services::begin_write;
use crate::{AllocationValidator, AppState, Result as ServiceErrorResult, ServiceError};

use erm_auth::Caller;
use erm_core::{
    Assignment, AssignmentDetails, AssignmentPatch, CapacityRequest, DateRange,
    validate_assignment_dates, validate_percentage,
};
use erm_db::{AssignmentRepository, EngineerRepository, ProjectRepository};

use chrono::NaiveDate;
use log::{debug, info};
use uuid::Uuid;

/// A validated-shape request to book an engineer onto a project.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub engineer_id: Uuid,
    pub project_id: Uuid,
    pub allocation_percentage: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub role: String,
}

pub struct AssignmentService;

impl AssignmentService {
    pub async fn list(state: &AppState) -> ServiceErrorResult<Vec<AssignmentDetails>> {
        Ok(AssignmentRepository::find_details_all(&state.pool).await?)
    }

    pub async fn get(state: &AppState, id: Uuid) -> ServiceErrorResult<AssignmentDetails> {
        AssignmentRepository::find_details_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Assignment", id))
    }

    /// Checks run in a fixed order: engineer exists, project exists, dates, capacity.
    pub async fn create(
        state: &AppState,
        caller: &Caller,
        input: NewAssignment,
    ) -> ServiceErrorResult<AssignmentDetails> {
        caller.require_manager()?;

        let result = Self::create_locked(state, input).await;
        Self::record(state, "create", &result);
        result
    }

    async fn create_locked(
        state: &AppState,
        input: NewAssignment,
    ) -> ServiceErrorResult<AssignmentDetails> {
        validate_percentage(input.allocation_percentage, "allocationPercentage")?;

        let _guard = state.locks.lock(input.engineer_id).await;
        let mut tx = begin_write(state).await?;

        let engineer = EngineerRepository::find_by_id(&mut *tx, input.engineer_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Engineer", input.engineer_id))?;
        let project = ProjectRepository::find_by_id(&mut *tx, input.project_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Project", input.project_id))?;

        let window = DateRange::new(input.start_date, input.end_date);
        validate_assignment_dates(&window, &project)?;

        let request = CapacityRequest {
            allocation: input.allocation_percentage,
            window,
            exclude: None,
        };
        let check = AllocationValidator::validate_for(&mut *tx, &engineer, &request).await?;

        let assignment = Assignment::new(
            engineer.id,
            project.id,
            input.allocation_percentage,
            input.start_date,
            input.end_date,
            input.role,
        )?;
        AssignmentRepository::create(&mut *tx, &assignment).await?;
        tx.commit().await?;

        info!(
            "Created assignment {} ({}% of {} on {}, load now {}/{})",
            assignment.id,
            assignment.allocation_percentage,
            engineer.id,
            project.id,
            check.total(),
            check.max_capacity
        );
        state.metrics.capacity_checked(check.total());

        Ok(AssignmentDetails {
            assignment,
            engineer_name: engineer.name,
            engineer_email: engineer.email,
            engineer_skills: engineer.skills,
            project_name: project.name,
            project_description: project.description,
            project_status: project.status,
        })
    }

    /// Allocation and date changes are re-validated with the assignment itself left
    /// out of the overlap sum. A role-only change skips validation.
    pub async fn update(
        state: &AppState,
        caller: &Caller,
        id: Uuid,
        patch: AssignmentPatch,
    ) -> ServiceErrorResult<AssignmentDetails> {
        caller.require_manager()?;

        let result = Self::update_locked(state, id, patch).await;
        Self::record(state, "update", &result);
        result
    }

    async fn update_locked(
        state: &AppState,
        id: Uuid,
        patch: AssignmentPatch,
    ) -> ServiceErrorResult<AssignmentDetails> {
        // The engineer of an assignment never changes, so it is safe to read before locking
        let engineer_id = AssignmentRepository::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Assignment", id))?
            .engineer_id;

        let _guard = state.locks.lock(engineer_id).await;
        let mut tx = begin_write(state).await?;

        let stored = AssignmentRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Assignment", id))?;
        let merged = patch.merge(&stored)?;

        if patch.touches_capacity() {
            let project = ProjectRepository::find_by_id(&mut *tx, stored.project_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Project", stored.project_id))?;
            validate_assignment_dates(&merged.window(), &project)?;

            let engineer = EngineerRepository::find_by_id(&mut *tx, stored.engineer_id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Engineer", stored.engineer_id))?;
            let request = CapacityRequest {
                allocation: merged.allocation_percentage,
                window: merged.window(),
                exclude: Some(id),
            };
            let check = AllocationValidator::validate_for(&mut *tx, &engineer, &request).await?;
            state.metrics.capacity_checked(check.total());
        }

        if !AssignmentRepository::update(&mut *tx, &merged).await? {
            return Err(ServiceError::not_found("Assignment", id));
        }
        let details = AssignmentRepository::find_details_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Assignment", id))?;
        tx.commit().await?;

        info!("Updated assignment {}", id);
        Ok(details)
    }

    /// Deleting only frees capacity, so it needs no lock.
    pub async fn delete(state: &AppState, caller: &Caller, id: Uuid) -> ServiceErrorResult<()> {
        caller.require_manager()?;

        let result = match AssignmentRepository::delete(&state.pool, id).await? {
            true => Ok(()),
            false => Err(ServiceError::not_found("Assignment", id)),
        };
        Self::record(state, "delete", &result);

        if result.is_ok() {
            info!("Deleted assignment {}", id);
        }
        result
    }

    fn record<T>(state: &AppState, operation: &str, result: &ServiceErrorResult<T>) {
        match result {
            Ok(_) => state.metrics.assignment_accepted(operation),
            Err(err) => {
                debug!("Assignment {} rejected: {}", operation, err);
                state
                    .metrics
                    .assignment_rejected(operation, &err.error_code().to_lowercase());
            }
        }
    }
}
