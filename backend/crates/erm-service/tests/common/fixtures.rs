#![allow(dead_code)]

use erm_auth::Caller;
use erm_core::{Engineer, Project, ProjectStatus, Seniority, SkillSet, UserRole};
use erm_service::{AppState, EngineerService, NewAssignment, NewEngineer, NewProject, ProjectService};

use chrono::NaiveDate;
use uuid::Uuid;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn manager() -> Caller {
    Caller::new(Uuid::new_v4(), UserRole::Manager)
}

pub fn engineer_caller() -> Caller {
    Caller::new(Uuid::new_v4(), UserRole::Engineer)
}

pub fn new_engineer(name: &str, skills: &str, max_capacity: i32) -> NewEngineer {
    NewEngineer {
        name: name.to_string(),
        email: format!("engineer-{}@example.com", Uuid::new_v4()),
        skills: SkillSet::from_delimited(skills),
        seniority: Seniority::Mid,
        max_capacity,
        department: "Engineering".to_string(),
    }
}

pub async fn seed_engineer(state: &AppState, skills: &str, max_capacity: i32) -> Engineer {
    EngineerService::create(state, &manager(), new_engineer("Test Engineer", skills, max_capacity))
        .await
        .expect("engineer created")
}

pub fn new_project(start: &str, end: &str, status: ProjectStatus) -> NewProject {
    NewProject {
        name: "Test Project".to_string(),
        description: "Test project description".to_string(),
        start_date: date(start),
        end_date: date(end),
        required_skills: SkillSet::from_delimited("React, Node.js"),
        team_size: 4,
        status,
    }
}

pub async fn seed_project(
    state: &AppState,
    owner: &Caller,
    start: &str,
    end: &str,
    status: ProjectStatus,
) -> Project {
    ProjectService::create(state, owner, new_project(start, end, status))
        .await
        .expect("project created")
}

pub fn booking(
    engineer_id: Uuid,
    project_id: Uuid,
    allocation: i32,
    start: &str,
    end: &str,
) -> NewAssignment {
    NewAssignment {
        engineer_id,
        project_id,
        allocation_percentage: allocation,
        start_date: date(start),
        end_date: date(end),
        role: "Developer".to_string(),
    }
}
