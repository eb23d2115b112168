use crate::EngineerDto;

use erm_core::Project;
use erm_service::SuitableEngineer;

use chrono::NaiveDate;
use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub required_skills: Vec<String>,
    pub team_size: i32,
    pub status: String,
    pub manager_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            required_skills: p.required_skills.to_vec(),
            status: p.status.as_str().to_string(),
            manager_id: p.manager_id.to_string(),
            name: p.name,
            description: p.description,
            start_date: p.start_date,
            end_date: p.end_date,
            team_size: p.team_size,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}

/// Engineer matching a project, with the required skills they cover
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitableEngineerDto {
    #[serde(flatten)]
    pub engineer: EngineerDto,
    pub matched_skills: Vec<String>,
}

impl From<SuitableEngineer> for SuitableEngineerDto {
    fn from(s: SuitableEngineer) -> Self {
        Self {
            engineer: s.engineer.into(),
            matched_skills: s.matched_skills,
        }
    }
}
