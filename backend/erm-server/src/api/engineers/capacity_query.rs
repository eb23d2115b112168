use serde::Deserialize;

/// `?policy=active_projects|all`
#[derive(Debug, Default, Deserialize)]
pub struct CapacityQuery {
    #[serde(default)]
    pub policy: Option<String>,
}
