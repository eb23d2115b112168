pub mod assignments;
pub mod delete_response;
pub mod engineers;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod projects;

use crate::ApiResult;

use erm_core::parse_uuid;

use uuid::Uuid;

/// Path or body id, rejected with a 400 when it is not a UUID.
#[track_caller]
pub fn parse_id(value: &str, field: &str) -> ApiResult<Uuid> {
    Ok(parse_uuid(value.trim(), field)?)
}
