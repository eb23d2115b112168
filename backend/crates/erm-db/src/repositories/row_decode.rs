//! Column decoding shared by the repositories. Ids are stored as TEXT, timestamps as
//! unix seconds, calendar dates as `YYYY-MM-DD` and skill sets as JSON arrays.

use crate::{DbError, Result as DbErrorResult};

use erm_core::{CoreError, SkillSet};

use std::fmt::Display;
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

#[track_caller]
fn decode_error(column: &str, message: impl Display) -> DbError {
    DbError::RowDecode {
        column: column.to_string(),
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

pub(crate) fn uuid_column(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let value: String = row.try_get(column)?;
    Uuid::parse_str(&value).map_err(|e| decode_error(column, e))
}

pub(crate) fn timestamp_column(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let seconds: i64 = row.try_get(column)?;
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| decode_error(column, format!("timestamp out of range: {seconds}")))
}

pub(crate) fn enum_column<T>(row: &SqliteRow, column: &str) -> DbErrorResult<T>
where
    T: FromStr<Err = CoreError>,
{
    let value: String = row.try_get(column)?;
    T::from_str(&value).map_err(|e| decode_error(column, e.user_message()))
}

pub(crate) fn skills_column(row: &SqliteRow, column: &str) -> DbErrorResult<SkillSet> {
    let value: String = row.try_get(column)?;
    let skills: Vec<String> = serde_json::from_str(&value).map_err(|e| decode_error(column, e))?;
    Ok(skills.into_iter().collect())
}

pub(crate) fn encode_skills(skills: &SkillSet) -> DbErrorResult<String> {
    serde_json::to_string(&skills.to_vec()).map_err(|e| decode_error("skills", e))
}
