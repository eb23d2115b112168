use erm_core::SkillSet;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEngineerRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub skills: Option<SkillSet>,

    #[serde(default)]
    pub seniority: Option<String>,

    #[serde(default)]
    pub max_capacity: Option<i32>,

    #[serde(default)]
    pub department: Option<String>,
}
