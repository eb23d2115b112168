use erm_core::{Engineer, StaffedAssignment};
use erm_service::EngineerOverview;

use chrono::NaiveDate;
use serde::Serialize;

/// Engineer DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub skills: Vec<String>,
    pub seniority: String,
    pub max_capacity: i32,
    pub department: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Engineer> for EngineerDto {
    fn from(e: Engineer) -> Self {
        Self {
            id: e.id.to_string(),
            role: e.role().as_str().to_string(),
            skills: e.skills.to_vec(),
            seniority: e.seniority.as_str().to_string(),
            name: e.name,
            email: e.email,
            max_capacity: e.max_capacity,
            department: e.department,
            created_at: e.created_at.timestamp(),
            updated_at: e.updated_at.timestamp(),
        }
    }
}

/// One assignment as seen from the engineer's side
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerAssignmentDto {
    pub id: String,
    pub project_id: String,
    pub project_name: String,
    pub project_status: String,
    pub allocation_percentage: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub role: String,
}

impl From<&StaffedAssignment> for EngineerAssignmentDto {
    fn from(s: &StaffedAssignment) -> Self {
        Self {
            id: s.assignment.id.to_string(),
            project_id: s.assignment.project_id.to_string(),
            project_name: s.project_name.clone(),
            project_status: s.project_status.as_str().to_string(),
            allocation_percentage: s.assignment.allocation_percentage,
            start_date: s.assignment.start_date,
            end_date: s.assignment.end_date,
            role: s.assignment.role.clone(),
        }
    }
}

/// Engineer with displayed capacity, for list and detail responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerOverviewDto {
    #[serde(flatten)]
    pub engineer: EngineerDto,
    pub current_allocation: i32,
    pub available_capacity: i32,
    pub assignments: Vec<EngineerAssignmentDto>,
}

impl From<EngineerOverview> for EngineerOverviewDto {
    fn from(o: EngineerOverview) -> Self {
        Self {
            current_allocation: o.capacity.current_allocation,
            available_capacity: o.capacity.available_capacity,
            assignments: o.assignments.iter().map(EngineerAssignmentDto::from).collect(),
            engineer: o.engineer.into(),
        }
    }
}

/// Capacity breakdown under one allocation policy
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityDto {
    pub engineer_id: String,
    pub name: String,
    pub max_capacity: i32,
    pub current_allocation: i32,
    pub available_capacity: i32,
    pub policy: String,
    /// Every assignment, whatever its project status
    pub assignments: Vec<EngineerAssignmentDto>,
    /// Ids of the assignments the policy sums into `currentAllocation`
    pub counted_assignment_ids: Vec<String>,
}

impl From<EngineerOverview> for CapacityDto {
    fn from(o: EngineerOverview) -> Self {
        Self {
            engineer_id: o.engineer.id.to_string(),
            max_capacity: o.capacity.max_capacity,
            current_allocation: o.capacity.current_allocation,
            available_capacity: o.capacity.available_capacity,
            policy: o.capacity.policy.as_str().to_string(),
            counted_assignment_ids: o
                .counted_assignments()
                .map(|staffed| staffed.assignment.id.to_string())
                .collect(),
            assignments: o.assignments.iter().map(EngineerAssignmentDto::from).collect(),
            name: o.engineer.name,
        }
    }
}
