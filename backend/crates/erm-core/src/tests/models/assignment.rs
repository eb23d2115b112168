use crate::tests::{booking, date};
use crate::{Assignment, AssignmentPatch, CoreError};

use uuid::Uuid;

#[test]
fn test_assignment_new_rejects_out_of_range_allocation() {
    let result = Assignment::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        120,
        date("2024-01-01"),
        date("2024-02-01"),
        "Developer".to_string(),
    );

    match result {
        Err(CoreError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("allocationPercentage"))
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_assignment_new_rejects_reversed_dates() {
    let result = Assignment::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        40,
        date("2024-03-01"),
        date("2024-02-01"),
        "Developer".to_string(),
    );

    assert!(matches!(result, Err(CoreError::InvalidDateRange { .. })));
}

#[test]
fn test_assignment_patch_merge_keeps_unpatched_fields() {
    let original = booking(Uuid::new_v4(), 40, "2024-01-01", "2024-06-30");
    let patch = AssignmentPatch {
        allocation_percentage: Some(60),
        end_date: Some(date("2024-05-31")),
        ..Default::default()
    };

    let merged = patch.merge(&original).unwrap();

    assert_eq!(merged.id, original.id);
    assert_eq!(merged.engineer_id, original.engineer_id);
    assert_eq!(merged.allocation_percentage, 60);
    assert_eq!(merged.start_date, original.start_date);
    assert_eq!(merged.end_date, date("2024-05-31"));
    assert_eq!(merged.role, original.role);
    assert!(patch.touches_capacity());
}

#[test]
fn test_assignment_patch_role_only_does_not_touch_capacity() {
    let patch = AssignmentPatch {
        role: Some("Tech Lead".to_string()),
        ..Default::default()
    };

    assert!(!patch.touches_capacity());
}

#[test]
fn test_assignment_patch_rejects_negative_allocation() {
    let original = booking(Uuid::new_v4(), 40, "2024-01-01", "2024-06-30");
    let patch = AssignmentPatch {
        allocation_percentage: Some(-5),
        ..Default::default()
    };

    assert!(patch.merge(&original).is_err());
}
