use erm_core::AssignmentDetails;

use chrono::NaiveDate;
use serde::Serialize;

/// Engineer fields joined into an assignment at read time
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedEngineerDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
}

/// Project fields joined into an assignment at read time
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedProjectDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

/// Assignment DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    pub id: String,
    pub engineer_id: String,
    pub project_id: String,
    pub allocation_percentage: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub role: String,
    pub engineer: AssignedEngineerDto,
    pub project: AssignedProjectDto,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<AssignmentDetails> for AssignmentDto {
    fn from(d: AssignmentDetails) -> Self {
        let a = d.assignment;
        Self {
            id: a.id.to_string(),
            engineer_id: a.engineer_id.to_string(),
            project_id: a.project_id.to_string(),
            allocation_percentage: a.allocation_percentage,
            start_date: a.start_date,
            end_date: a.end_date,
            role: a.role,
            engineer: AssignedEngineerDto {
                id: a.engineer_id.to_string(),
                name: d.engineer_name,
                email: d.engineer_email,
                skills: d.engineer_skills.to_vec(),
            },
            project: AssignedProjectDto {
                id: a.project_id.to_string(),
                name: d.project_name,
                description: d.project_description,
                status: d.project_status.as_str().to_string(),
            },
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}
