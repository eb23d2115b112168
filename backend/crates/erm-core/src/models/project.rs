//! Project entity - the date window and skill profile assignments are booked against.

use crate::{CoreResult, DateRange, ProjectStatus, SkillSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub required_skills: SkillSet,
    /// Target headcount. Advisory only, never checked against assignments.
    pub team_size: i32,
    pub status: ProjectStatus,
    /// User that created the project; only this manager may modify or delete it
    pub manager_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        description: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        required_skills: SkillSet,
        team_size: i32,
        status: ProjectStatus,
        manager_id: Uuid,
    ) -> CoreResult<Self> {
        DateRange::new(start_date, end_date).ensure_ordered()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            start_date,
            end_date,
            required_skills,
            team_size,
            status,
            manager_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn window(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    pub fn is_managed_by(&self, user_id: Uuid) -> bool {
        self.manager_id == user_id
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub required_skills: Option<SkillSet>,
    pub team_size: Option<i32>,
    pub status: Option<ProjectStatus>,
}

impl ProjectPatch {
    pub fn touches_window(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }

    /// Merge the patch over `project`. The merged window must still be ordered.
    pub fn apply(&self, project: &Project) -> CoreResult<Project> {
        let mut merged = project.clone();

        if let Some(ref name) = self.name {
            merged.name = name.clone();
        }
        if let Some(ref description) = self.description {
            merged.description = description.clone();
        }
        if let Some(start_date) = self.start_date {
            merged.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            merged.end_date = end_date;
        }
        if let Some(ref required_skills) = self.required_skills {
            merged.required_skills = required_skills.clone();
        }
        if let Some(team_size) = self.team_size {
            merged.team_size = team_size;
        }
        if let Some(status) = self.status {
            merged.status = status;
        }

        merged.window().ensure_ordered()?;
        merged.updated_at = Utc::now();
        Ok(merged)
    }
}
