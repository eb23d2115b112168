//! Conflict validation: would a candidate assignment push an engineer over their ceiling?
//!
//! Capacity is a time-windowed resource. Only assignments whose window overlaps the
//! candidate's (inclusive at both ends) compete for the same percentage pool, so two
//! assignments that never overlap may each take up to 100%.
//!
//! The overlapping set is summed as a whole. Two existing assignments that overlap the
//! candidate but not each other still both count; the rule is deliberately
//! conservative and never looks for the single busiest day.

use crate::{Assignment, CoreError, CoreResult, DateRange, Engineer};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// The prospective booking being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityRequest {
    pub allocation: i32,
    pub window: DateRange,
    /// Assignment being modified, left out of the sum so it is not counted twice
    pub exclude: Option<Uuid>,
}

/// Numbers behind an accepted check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityCheck {
    pub overlapping_allocation: i32,
    pub requested: i32,
    pub max_capacity: i32,
}

impl CapacityCheck {
    pub fn total(&self) -> i32 {
        self.overlapping_allocation + self.requested
    }

    pub fn remaining(&self) -> i32 {
        (self.max_capacity - self.total()).max(0)
    }
}

/// Sum of the engineer's assignments overlapping `request.window`, excluding
/// `request.exclude`.
pub fn overlapping_allocation(
    engineer_id: Uuid,
    existing: &[Assignment],
    request: &CapacityRequest,
) -> i32 {
    existing
        .iter()
        .filter(|a| a.engineer_id == engineer_id)
        .filter(|a| Some(a.id) != request.exclude)
        .filter(|a| a.window().overlaps(&request.window))
        .map(|a| a.allocation_percentage)
        .sum()
}

/// Accept or reject `request` against the engineer's ceiling.
#[track_caller]
pub fn check_capacity(
    engineer: &Engineer,
    existing: &[Assignment],
    request: &CapacityRequest,
) -> CoreResult<CapacityCheck> {
    let check = CapacityCheck {
        overlapping_allocation: overlapping_allocation(engineer.id, existing, request),
        requested: request.allocation,
        max_capacity: engineer.max_capacity,
    };

    if check.total() > engineer.max_capacity {
        return Err(CoreError::CapacityExceeded {
            current: check.overlapping_allocation,
            requested: check.requested,
            max_capacity: check.max_capacity,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(check)
}

/// Highest load any single assignment sees under the overlap rule: its own allocation
/// plus every other assignment overlapping it. A ceiling at or above this value keeps
/// every existing assignment valid.
pub fn max_overlapping_load(existing: &[Assignment]) -> i32 {
    existing
        .iter()
        .map(|assignment| {
            let request = CapacityRequest {
                allocation: assignment.allocation_percentage,
                window: assignment.window(),
                exclude: Some(assignment.id),
            };
            overlapping_allocation(assignment.engineer_id, existing, &request)
                + assignment.allocation_percentage
        })
        .max()
        .unwrap_or(0)
}
