//! Engineer entity - a user with role `engineer` and a capacity ceiling.

use crate::{CoreResult, Seniority, SkillSet, UserRole, validate_percentage};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An engineer who can be booked onto projects.
///
/// Current allocation is deliberately absent: it is always derived from the live
/// assignment set, never stored on the engineer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engineer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub skills: SkillSet,
    pub seniority: Seniority,
    /// Ceiling on simultaneous allocation, percent of full time
    pub max_capacity: i32,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Engineer {
    pub const ROLE: UserRole = UserRole::Engineer;

    pub fn new(
        name: String,
        email: String,
        skills: SkillSet,
        seniority: Seniority,
        max_capacity: i32,
        department: String,
    ) -> CoreResult<Self> {
        validate_percentage(max_capacity, "maxCapacity")?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            skills,
            seniority,
            max_capacity,
            department,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn role(&self) -> UserRole {
        Self::ROLE
    }
}

/// Partial engineer update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct EngineerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<SkillSet>,
    pub seniority: Option<Seniority>,
    pub max_capacity: Option<i32>,
    pub department: Option<String>,
}

impl EngineerPatch {
    /// Merge the patch over `engineer`, validating the result.
    pub fn apply(&self, engineer: &Engineer) -> CoreResult<Engineer> {
        let mut merged = engineer.clone();

        if let Some(ref name) = self.name {
            merged.name = name.clone();
        }
        if let Some(ref email) = self.email {
            merged.email = email.clone();
        }
        if let Some(ref skills) = self.skills {
            merged.skills = skills.clone();
        }
        if let Some(seniority) = self.seniority {
            merged.seniority = seniority;
        }
        if let Some(max_capacity) = self.max_capacity {
            merged.max_capacity = validate_percentage(max_capacity, "maxCapacity")?;
        }
        if let Some(ref department) = self.department {
            merged.department = department.clone();
        }

        merged.updated_at = Utc::now();
        Ok(merged)
    }

    /// A lowered ceiling must be re-checked against the engineer's booked load.
    pub fn lowers_capacity(&self, engineer: &Engineer) -> bool {
        self.max_capacity
            .is_some_and(|max_capacity| max_capacity < engineer.max_capacity)
    }
}
