use crate::{CoreError, CoreResult, DateRange, Project};

use std::panic::Location;

use error_location::ErrorLocation;

/// An assignment window must be ordered and sit inside its project's window.
///
/// Rules run in order: `start < end` first (`InvalidDateRange`), then containment
/// (`OutsideProjectWindow`).
#[track_caller]
pub fn validate_assignment_dates(window: &DateRange, project: &Project) -> CoreResult<()> {
    window.ensure_ordered()?;

    if !project.window().contains(window) {
        return Err(CoreError::OutsideProjectWindow {
            start: window.start,
            end: window.end,
            project_start: project.start_date,
            project_end: project.end_date,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// A project window change must keep every existing assignment inside it.
#[track_caller]
pub fn validate_project_window(project_window: &DateRange, assignments: &[DateRange]) -> CoreResult<()> {
    project_window.ensure_ordered()?;

    let outside = assignments
        .iter()
        .filter(|window| !project_window.contains(window))
        .count();

    if outside > 0 {
        return Err(CoreError::Validation {
            message: format!(
                "{outside} existing assignment(s) would fall outside the new project dates \
                 ({} to {})",
                project_window.start, project_window.end
            ),
            field: Some("startDate".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
