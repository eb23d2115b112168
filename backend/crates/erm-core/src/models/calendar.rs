//! Calendar-date helpers shared by every entity that carries a date window.

use crate::{CoreError, CoreResult};

use std::ops::RangeInclusive;
use std::panic::Location;

use chrono::{DateTime, Datelike, NaiveDate};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Four-digit years only. Stored dates compare as `YYYY-MM-DD` text.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Inclusive calendar window `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Two windows overlap when they share at least one day. Both ends are inclusive,
    /// so a window ending on Jun 30 overlaps one starting on Jun 30.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// True when `other` lies entirely inside this window.
    pub fn contains(&self, other: &DateRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Rejects windows whose start is not strictly before their end, and windows
    /// reaching outside [`SUPPORTED_YEARS`].
    #[track_caller]
    pub fn ensure_ordered(&self) -> CoreResult<()> {
        for date in [self.start, self.end] {
            ensure_supported(date)?;
        }

        if self.start < self.end {
            Ok(())
        } else {
            Err(CoreError::InvalidDateRange {
                start: self.start,
                end: self.end,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp
/// (the date part of the timestamp is kept).
#[track_caller]
pub fn parse_calendar_date(value: &str, field: &str) -> CoreResult<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return ensure_supported(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return ensure_supported(timestamp.date_naive());
    }

    Err(CoreError::Validation {
        message: format!("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)"),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn ensure_supported(date: NaiveDate) -> CoreResult<NaiveDate> {
    if SUPPORTED_YEARS.contains(&date.year()) {
        Ok(date)
    } else {
        Err(CoreError::DateOutOfRange {
            date,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
pub fn parse_uuid(value: &str, field: &str) -> CoreResult<Uuid> {
    Uuid::parse_str(value).map_err(|source| CoreError::Uuid {
        field: field.to_string(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Percentages (allocation, max capacity) are whole numbers in `0..=100`.
#[track_caller]
pub fn validate_percentage(value: i32, field: &str) -> CoreResult<i32> {
    if (0..=100).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::Validation {
            message: format!("{field} must be between 0 and 100, got {value}"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
