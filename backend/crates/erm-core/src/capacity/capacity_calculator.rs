//! Displayed allocation: a pure sum over an engineer's assignments under a named policy.

use crate::{AllocationPolicy, Engineer, StaffedAssignment};

use serde::Serialize;
use uuid::Uuid;

/// Sum of `allocation_percentage` over the engineer's assignments selected by `policy`.
///
/// Assignments belonging to other engineers are ignored.
pub fn compute_allocation(
    engineer_id: Uuid,
    assignments: &[StaffedAssignment],
    policy: AllocationPolicy,
) -> i32 {
    assignments
        .iter()
        .filter(|staffed| staffed.assignment.engineer_id == engineer_id)
        .filter(|staffed| policy.counts(staffed.project_status))
        .map(|staffed| staffed.assignment.allocation_percentage)
        .sum()
}

/// Room left under the ceiling, never negative.
pub fn available_capacity(max_capacity: i32, allocation: i32) -> i32 {
    (max_capacity - allocation).max(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySummary {
    pub engineer_id: Uuid,
    pub max_capacity: i32,
    pub current_allocation: i32,
    pub available_capacity: i32,
    pub policy: AllocationPolicy,
}

impl CapacitySummary {
    pub fn compute(
        engineer: &Engineer,
        assignments: &[StaffedAssignment],
        policy: AllocationPolicy,
    ) -> Self {
        let current_allocation = compute_allocation(engineer.id, assignments, policy);
        Self {
            engineer_id: engineer.id,
            max_capacity: engineer.max_capacity,
            current_allocation,
            available_capacity: available_capacity(engineer.max_capacity, current_allocation),
            policy,
        }
    }
}
