mod capacity;
mod models;

use crate::{Assignment, Engineer, Project, ProjectStatus, Seniority, SkillSet};

use chrono::NaiveDate;
use uuid::Uuid;

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) fn engineer_with(max_capacity: i32, skills: &[&str]) -> Engineer {
    Engineer::new(
        "Jane Doe".to_string(),
        "jane@example.com".to_string(),
        skills.iter().copied().collect(),
        Seniority::Mid,
        max_capacity,
        "Engineering".to_string(),
    )
    .unwrap()
}

pub(crate) fn project_between(start: &str, end: &str, status: ProjectStatus) -> Project {
    Project::new(
        "Platform".to_string(),
        "Platform rebuild".to_string(),
        date(start),
        date(end),
        SkillSet::from_delimited("React, Node.js"),
        4,
        status,
        Uuid::new_v4(),
    )
    .unwrap()
}

pub(crate) fn booking(engineer_id: Uuid, allocation: i32, start: &str, end: &str) -> Assignment {
    Assignment::new(
        engineer_id,
        Uuid::new_v4(),
        allocation,
        date(start),
        date(end),
        "Developer".to_string(),
    )
    .unwrap()
}
