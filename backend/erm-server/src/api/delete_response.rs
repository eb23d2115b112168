use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub id: String,
    /// Assignments removed along with the deleted engineer or project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_assignments: Option<u64>,
}
