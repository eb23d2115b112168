use crate::tests::{booking, date, engineer_with};
use crate::{CapacityRequest, CoreError, DateRange, check_capacity, max_overlapping_load};

fn request(allocation: i32, start: &str, end: &str) -> CapacityRequest {
    CapacityRequest {
        allocation,
        window: DateRange::new(date(start), date(end)),
        exclude: None,
    }
}

#[test]
fn given_non_overlapping_window_when_checked_then_accepted() {
    let engineer = engineer_with(100, &[]);
    let existing = vec![booking(engineer.id, 50, "2024-01-01", "2024-06-30")];

    let check = check_capacity(&engineer, &existing, &request(40, "2024-07-01", "2024-12-31"))
        .unwrap();

    assert_eq!(check.overlapping_allocation, 0);
    assert_eq!(check.total(), 40);
    assert_eq!(check.remaining(), 60);
}

#[test]
fn given_overlapping_window_over_ceiling_when_checked_then_rejected_with_numbers() {
    let engineer = engineer_with(100, &[]);
    let existing = vec![booking(engineer.id, 50, "2024-01-01", "2024-06-30")];

    let result = check_capacity(&engineer, &existing, &request(60, "2024-03-01", "2024-04-01"));

    let err = result.unwrap_err();
    match err {
        CoreError::CapacityExceeded {
            current,
            requested,
            max_capacity,
            ..
        } => assert_eq!((current, requested, max_capacity), (50, 60, 100)),
        ref other => panic!("expected CapacityExceeded, got {other:?}"),
    }
    assert!(err.user_message().contains("50 + 60 = 110 > 100"));
    assert!(err.user_message().contains("available: 50"));
}

#[test]
fn given_shared_boundary_day_when_sum_exceeds_ceiling_then_rejected() {
    let engineer = engineer_with(100, &[]);
    let existing = vec![booking(engineer.id, 50, "2024-01-01", "2024-06-30")];

    let result = check_capacity(&engineer, &existing, &request(60, "2024-06-30", "2024-09-30"));

    assert!(matches!(result, Err(CoreError::CapacityExceeded { .. })));
}

#[test]
fn given_shared_boundary_day_when_sum_within_ceiling_then_accepted() {
    let engineer = engineer_with(100, &[]);
    let existing = vec![booking(engineer.id, 50, "2024-01-01", "2024-06-30")];

    let check = check_capacity(&engineer, &existing, &request(50, "2024-06-30", "2024-09-30"))
        .unwrap();

    assert_eq!(check.total(), 100);
}

#[test]
fn given_disjoint_assignments_when_each_takes_full_capacity_then_both_accepted() {
    let engineer = engineer_with(100, &[]);
    let first = booking(engineer.id, 100, "2024-01-01", "2024-03-31");

    check_capacity(&engineer, &[], &request(100, "2024-01-01", "2024-03-31")).unwrap();
    check_capacity(
        &engineer,
        std::slice::from_ref(&first),
        &request(100, "2024-04-01", "2024-06-30"),
    )
    .unwrap();
}

#[test]
fn given_excluded_assignment_when_checked_then_not_double_counted() {
    let engineer = engineer_with(100, &[]);
    let own = booking(engineer.id, 80, "2024-01-01", "2024-06-30");
    let existing = vec![own.clone()];

    let mut raise = request(90, "2024-01-01", "2024-06-30");
    raise.exclude = Some(own.id);

    let check = check_capacity(&engineer, &existing, &raise).unwrap();
    assert_eq!(check.overlapping_allocation, 0);
}

#[test]
fn given_other_engineers_assignments_when_checked_then_ignored() {
    let engineer = engineer_with(100, &[]);
    let someone_else = engineer_with(100, &[]);
    let existing = vec![booking(someone_else.id, 100, "2024-01-01", "2024-12-31")];

    let check = check_capacity(&engineer, &existing, &request(100, "2024-02-01", "2024-03-01"))
        .unwrap();
    assert_eq!(check.overlapping_allocation, 0);
}

#[test]
fn given_lower_ceiling_when_checked_then_reduced_ceiling_applies() {
    let engineer = engineer_with(50, &[]);
    let existing = vec![booking(engineer.id, 30, "2024-01-01", "2024-06-30")];

    let result = check_capacity(&engineer, &existing, &request(30, "2024-02-01", "2024-02-28"));

    assert!(matches!(
        result,
        Err(CoreError::CapacityExceeded { max_capacity: 50, .. })
    ));
}

#[test]
fn test_max_overlapping_load() {
    let engineer = engineer_with(100, &[]);
    let existing = vec![
        booking(engineer.id, 30, "2024-01-01", "2024-03-31"),
        booking(engineer.id, 40, "2024-03-01", "2024-05-31"),
        booking(engineer.id, 20, "2024-07-01", "2024-08-31"),
    ];

    assert_eq!(max_overlapping_load(&existing), 70);
    assert_eq!(max_overlapping_load(&[]), 0);
}
