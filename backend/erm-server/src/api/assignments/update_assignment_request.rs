use serde::Deserialize;

/// Engineer and project are fixed once booked; only these fields may change
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignmentRequest {
    #[serde(default)]
    pub allocation_percentage: Option<i32>,

    #[serde(default)]
    pub start_date: Option<String>,

    #[serde(default)]
    pub end_date: Option<String>,

    #[serde(default)]
    pub role: Option<String>,
}
