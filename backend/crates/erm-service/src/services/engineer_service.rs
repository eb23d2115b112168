use crate::services::{begin_write, require_text};
use crate::{AppState, Result as ServiceErrorResult, ServiceError};

use erm_auth::Caller;
use erm_core::{
    AllocationPolicy, CapacitySummary, Engineer, EngineerPatch, Seniority, SkillSet,
    StaffedAssignment, max_overlapping_load,
};
use erm_db::{AssignmentRepository, EngineerRepository, UserRepository};

use std::collections::HashMap;

use log::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewEngineer {
    pub name: String,
    pub email: String,
    pub skills: SkillSet,
    pub seniority: Seniority,
    pub max_capacity: i32,
    pub department: String,
}

/// An engineer with their displayed capacity and every assignment they hold.
#[derive(Debug, Clone)]
pub struct EngineerOverview {
    pub engineer: Engineer,
    pub capacity: CapacitySummary,
    pub assignments: Vec<StaffedAssignment>,
}

impl EngineerOverview {
    fn build(engineer: Engineer, assignments: Vec<StaffedAssignment>, policy: AllocationPolicy) -> Self {
        let capacity = CapacitySummary::compute(&engineer, &assignments, policy);
        Self {
            engineer,
            capacity,
            assignments,
        }
    }

    /// Assignments that make up `capacity.current_allocation`.
    pub fn counted_assignments(&self) -> impl Iterator<Item = &StaffedAssignment> {
        self.assignments
            .iter()
            .filter(|staffed| self.capacity.policy.counts(staffed.project_status))
    }
}

pub struct EngineerService;

impl EngineerService {
    pub async fn list(
        state: &AppState,
        policy: AllocationPolicy,
    ) -> ServiceErrorResult<Vec<EngineerOverview>> {
        let engineers = EngineerRepository::find_all(&state.pool).await?;
        let staffed = AssignmentRepository::find_staffed_all(&state.pool).await?;

        let mut by_engineer: HashMap<Uuid, Vec<StaffedAssignment>> = HashMap::new();
        for assignment in staffed {
            by_engineer
                .entry(assignment.assignment.engineer_id)
                .or_default()
                .push(assignment);
        }

        let overviews = engineers
            .into_iter()
            .map(|engineer| {
                let own = by_engineer.remove(&engineer.id).unwrap_or_default();
                EngineerOverview::build(engineer, own, policy)
            })
            .collect();

        Ok(overviews)
    }

    pub async fn get(
        state: &AppState,
        id: Uuid,
        policy: AllocationPolicy,
    ) -> ServiceErrorResult<EngineerOverview> {
        let engineer = EngineerRepository::find_by_id(&state.pool, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Engineer", id))?;
        let assignments = AssignmentRepository::find_staffed_by_engineer(&state.pool, id).await?;

        Ok(EngineerOverview::build(engineer, assignments, policy))
    }

    pub async fn create(
        state: &AppState,
        caller: &Caller,
        input: NewEngineer,
    ) -> ServiceErrorResult<Engineer> {
        caller.require_manager()?;

        let name = require_text(&input.name, "name")?;
        let email = normalize_email(&input.email)?;

        if UserRepository::email_taken(&state.pool, &email, None).await? {
            return Err(ServiceError::validation(
                "User with this email already exists",
                Some("email"),
            ));
        }

        let engineer = Engineer::new(
            name,
            email,
            input.skills,
            input.seniority,
            input.max_capacity,
            input.department,
        )?;
        EngineerRepository::create(&state.pool, &engineer).await?;

        info!("Created engineer {} ({})", engineer.id, engineer.email);
        Ok(engineer)
    }

    /// A lowered ceiling is rejected when the engineer's existing overlapping
    /// bookings already exceed it.
    pub async fn update(
        state: &AppState,
        caller: &Caller,
        id: Uuid,
        mut patch: EngineerPatch,
    ) -> ServiceErrorResult<Engineer> {
        caller.require_manager()?;

        if let Some(ref name) = patch.name {
            patch.name = Some(require_text(name, "name")?);
        }
        if let Some(ref email) = patch.email {
            patch.email = Some(normalize_email(email)?);
        }

        let _guard = state.locks.lock(id).await;
        let mut tx = begin_write(state).await?;

        let stored = EngineerRepository::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Engineer", id))?;

        if let Some(ref email) = patch.email {
            if *email != stored.email
                && UserRepository::email_taken(&mut *tx, email, Some(id)).await?
            {
                return Err(ServiceError::validation(
                    "User with this email already exists",
                    Some("email"),
                ));
            }
        }

        let merged = patch.apply(&stored)?;

        if patch.lowers_capacity(&stored) {
            let assignments = AssignmentRepository::find_by_engineer(&mut *tx, id).await?;
            let booked = max_overlapping_load(&assignments);
            if merged.max_capacity < booked {
                return Err(ServiceError::validation(
                    format!(
                        "maxCapacity {} is below the engineer's booked load of {}%",
                        merged.max_capacity, booked
                    ),
                    Some("maxCapacity"),
                ));
            }
        }

        if !EngineerRepository::update(&mut *tx, &merged).await? {
            return Err(ServiceError::not_found("Engineer", id));
        }
        tx.commit().await?;

        info!("Updated engineer {}", id);
        Ok(merged)
    }

    /// Removes the engineer and every assignment they hold, atomically.
    pub async fn delete(state: &AppState, caller: &Caller, id: Uuid) -> ServiceErrorResult<u64> {
        caller.require_manager()?;

        let _guard = state.locks.lock(id).await;
        let mut tx = begin_write(state).await?;

        if EngineerRepository::find_by_id(&mut *tx, id).await?.is_none() {
            return Err(ServiceError::not_found("Engineer", id));
        }
        let removed = AssignmentRepository::delete_by_engineer(&mut *tx, id).await?;
        EngineerRepository::delete(&mut *tx, id).await?;
        tx.commit().await?;

        info!("Deleted engineer {} and {} assignment(s)", id, removed);
        Ok(removed)
    }
}

fn normalize_email(email: &str) -> ServiceErrorResult<String> {
    let email = email.trim().to_lowercase();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if valid {
        Ok(email)
    } else {
        Err(ServiceError::validation(
            "Please enter a valid email",
            Some("email"),
        ))
    }
}
