#![allow(dead_code)]

use erm_core::{Assignment, Engineer, Project, ProjectStatus, Seniority, SkillSet};

use chrono::NaiveDate;
use uuid::Uuid;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Creates a test Engineer with a unique email
pub fn create_test_engineer(skills: &str, max_capacity: i32) -> Engineer {
    let id = Uuid::new_v4();
    Engineer::new(
        "Test Engineer".to_string(),
        format!("engineer-{}@example.com", id),
        SkillSet::from_delimited(skills),
        Seniority::Mid,
        max_capacity,
        "Engineering".to_string(),
    )
    .expect("valid test engineer")
}

/// Creates a test Project spanning the first half of 2024
pub fn create_test_project(manager_id: Uuid, status: ProjectStatus) -> Project {
    Project::new(
        "Test Project".to_string(),
        "Test project description".to_string(),
        date("2024-01-01"),
        date("2024-06-30"),
        SkillSet::from_delimited("React, Node.js"),
        4,
        status,
        manager_id,
    )
    .expect("valid test project")
}

/// Creates a test Assignment
pub fn create_test_assignment(
    engineer_id: Uuid,
    project_id: Uuid,
    allocation: i32,
    start: &str,
    end: &str,
) -> Assignment {
    Assignment::new(
        engineer_id,
        project_id,
        allocation,
        date(start),
        date(end),
        "Developer".to_string(),
    )
    .expect("valid test assignment")
}
