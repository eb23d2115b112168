//! Assignment entity - a share of one engineer's time booked on one project.

use crate::{CoreResult, DateRange, ProjectStatus, SkillSet, validate_percentage};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: Uuid,
    pub engineer_id: Uuid,
    pub project_id: Uuid,
    /// Share of the engineer's time, 0-100
    pub allocation_percentage: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Free-text function on the project, e.g. "Lead Developer"
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(
        engineer_id: Uuid,
        project_id: Uuid,
        allocation_percentage: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        role: String,
    ) -> CoreResult<Self> {
        validate_percentage(allocation_percentage, "allocationPercentage")?;
        DateRange::new(start_date, end_date).ensure_ordered()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            engineer_id,
            project_id,
            allocation_percentage,
            start_date,
            end_date,
            role,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn window(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Partial assignment update.
///
/// Engineer and project are fixed for the life of an assignment; moving work to
/// another engineer or project is a delete followed by a create.
#[derive(Debug, Clone, Default)]
pub struct AssignmentPatch {
    pub allocation_percentage: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub role: Option<String>,
}

impl AssignmentPatch {
    /// Whether the patch changes anything the capacity and date rules look at.
    pub fn touches_capacity(&self) -> bool {
        self.allocation_percentage.is_some() || self.start_date.is_some() || self.end_date.is_some()
    }

    /// Patched values over stored values. Validation of the merged candidate is the
    /// caller's job; only the percentage range is checked here.
    pub fn merge(&self, assignment: &Assignment) -> CoreResult<Assignment> {
        let mut merged = assignment.clone();

        if let Some(allocation) = self.allocation_percentage {
            merged.allocation_percentage = validate_percentage(allocation, "allocationPercentage")?;
        }
        if let Some(start_date) = self.start_date {
            merged.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            merged.end_date = end_date;
        }
        if let Some(ref role) = self.role {
            merged.role = role.clone();
        }

        merged.updated_at = Utc::now();
        Ok(merged)
    }
}

/// An assignment joined with the project facts needed for display and for the
/// active-project allocation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaffedAssignment {
    pub assignment: Assignment,
    pub project_name: String,
    pub project_status: ProjectStatus,
}

/// Read-time join of an assignment with the engineer and project it links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentDetails {
    pub assignment: Assignment,
    pub engineer_name: String,
    pub engineer_email: String,
    pub engineer_skills: SkillSet,
    pub project_name: String,
    pub project_description: String,
    pub project_status: ProjectStatus,
}
