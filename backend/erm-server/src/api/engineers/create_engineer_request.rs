use erm_core::SkillSet;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEngineerRequest {
    pub name: String,

    /// Unique across all users
    pub email: String,

    /// JSON array or comma-delimited string
    #[serde(default)]
    pub skills: SkillSet,

    /// "junior", "mid" or "senior" (defaults to "mid")
    #[serde(default)]
    pub seniority: Option<String>,

    /// Percentage ceiling, defaults to full time
    #[serde(default)]
    pub max_capacity: Option<i32>,

    #[serde(default)]
    pub department: Option<String>,
}
