use crate::{CoreError, CoreResult, ProjectStatus};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which assignments count toward an engineer's displayed allocation.
///
/// Conflict validation never uses a policy: it sums temporal overlap regardless of
/// project status (see `check_capacity`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AllocationPolicy {
    /// Every assignment, whatever its project's status
    #[serde(rename = "all", alias = "all_assignments")]
    AllAssignments,
    /// Only assignments whose project is `active`
    #[default]
    ActiveProjects,
}

impl AllocationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AllAssignments => "all",
            Self::ActiveProjects => "active_projects",
        }
    }

    pub fn counts(&self, project_status: ProjectStatus) -> bool {
        match self {
            Self::AllAssignments => true,
            Self::ActiveProjects => project_status == ProjectStatus::Active,
        }
    }
}

impl FromStr for AllocationPolicy {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "all" | "all_assignments" => Ok(Self::AllAssignments),
            "active" | "active_projects" => Ok(Self::ActiveProjects),
            _ => Err(CoreError::InvalidAllocationPolicy {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AllocationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
