use erm_core::SkillSet;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub required_skills: Option<SkillSet>,

    #[serde(default)]
    pub team_size: Option<i32>,

    #[serde(default)]
    pub status: Option<String>,
}
