pub mod capacity;
pub mod error;
pub mod matching;
pub mod models;

pub use capacity::allocation_check::{
    CapacityCheck, CapacityRequest, check_capacity, max_overlapping_load, overlapping_allocation,
};
pub use capacity::allocation_policy::AllocationPolicy;
pub use capacity::capacity_calculator::{CapacitySummary, available_capacity, compute_allocation};
pub use capacity::date_range_validator::{validate_assignment_dates, validate_project_window};
pub use error::{CoreError, CoreResult};
pub use matching::skill_matcher::{find_suitable_engineers, matched_skills};
pub use models::assignment::{Assignment, AssignmentDetails, AssignmentPatch, StaffedAssignment};
pub use models::calendar::{
    DateRange, SUPPORTED_YEARS, parse_calendar_date, parse_uuid, validate_percentage,
};
pub use models::engineer::{Engineer, EngineerPatch};
pub use models::manager::Manager;
pub use models::project::{Project, ProjectPatch};
pub use models::project_status::ProjectStatus;
pub use models::seniority::Seniority;
pub use models::skill_set::SkillSet;
pub use models::user_role::UserRole;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
