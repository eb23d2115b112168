use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    pub engineer_id: String,

    pub project_id: String,

    /// Whole percentage, 0-100
    pub allocation_percentage: i32,

    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub start_date: String,

    pub end_date: String,

    /// Function on the project, e.g. "Lead Developer"
    #[serde(default)]
    pub role: String,
}
