use crate::tests::{date, project_between};
use crate::{CoreError, DateRange, ProjectStatus, validate_assignment_dates, validate_project_window};

#[test]
fn given_window_inside_project_when_validated_then_ok() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);

    let result = validate_assignment_dates(
        &DateRange::new(date("2024-01-01"), date("2024-06-30")),
        &project,
    );

    assert!(result.is_ok());
}

#[test]
fn given_window_straddling_project_start_when_validated_then_outside_window() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);

    let result = validate_assignment_dates(
        &DateRange::new(date("2023-12-15"), date("2024-01-15")),
        &project,
    );

    assert!(matches!(result, Err(CoreError::OutsideProjectWindow { .. })));
}

#[test]
fn given_window_ending_after_project_when_validated_then_outside_window() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);

    let result = validate_assignment_dates(
        &DateRange::new(date("2024-05-01"), date("2024-07-01")),
        &project,
    );

    assert!(matches!(result, Err(CoreError::OutsideProjectWindow { .. })));
}

#[test]
fn given_reversed_window_when_validated_then_invalid_range_checked_first() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);

    // Reversed and outside the project: ordering is reported first
    let result = validate_assignment_dates(
        &DateRange::new(date("2025-02-01"), date("2025-01-01")),
        &project,
    );

    assert!(matches!(result, Err(CoreError::InvalidDateRange { .. })));
}

#[test]
fn given_single_day_window_when_validated_then_invalid_range() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);

    let result = validate_assignment_dates(
        &DateRange::new(date("2024-03-01"), date("2024-03-01")),
        &project,
    );

    assert!(matches!(result, Err(CoreError::InvalidDateRange { .. })));
}

#[test]
fn given_shrunk_project_window_when_assignments_fall_outside_then_rejected() {
    let assignments = vec![
        DateRange::new(date("2024-01-01"), date("2024-03-31")),
        DateRange::new(date("2024-05-01"), date("2024-06-30")),
    ];

    let shrunk = DateRange::new(date("2024-01-01"), date("2024-04-30"));
    let result = validate_project_window(&shrunk, &assignments);

    match result {
        Err(CoreError::Validation { message, .. }) => assert!(message.starts_with("1 existing")),
        other => panic!("expected Validation, got {other:?}"),
    }

    let widened = DateRange::new(date("2023-12-01"), date("2024-12-31"));
    assert!(validate_project_window(&widened, &assignments).is_ok());
}
