use erm_core::SkillSet;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub start_date: String,

    pub end_date: String,

    /// JSON array or comma-delimited string
    #[serde(default)]
    pub required_skills: SkillSet,

    /// Advisory headcount (defaults to 1)
    #[serde(default)]
    pub team_size: Option<i32>,

    /// "planning", "active", "completed" or "on-hold" (defaults to "planning")
    #[serde(default)]
    pub status: Option<String>,
}
