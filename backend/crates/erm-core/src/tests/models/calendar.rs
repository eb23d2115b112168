use crate::tests::date;
use crate::{CoreError, DateRange, parse_calendar_date, parse_uuid, validate_percentage};

#[test]
fn test_overlap_is_inclusive_at_both_ends() {
    let first = DateRange::new(date("2024-01-01"), date("2024-06-30"));
    let touching = DateRange::new(date("2024-06-30"), date("2024-09-30"));
    let after = DateRange::new(date("2024-07-01"), date("2024-09-30"));

    assert!(first.overlaps(&touching));
    assert!(touching.overlaps(&first));
    assert!(!first.overlaps(&after));
    assert!(!after.overlaps(&first));
}

#[test]
fn test_contains() {
    let outer = DateRange::new(date("2024-01-01"), date("2024-06-30"));

    assert!(outer.contains(&outer));
    assert!(outer.contains(&DateRange::new(date("2024-02-01"), date("2024-03-01"))));
    assert!(!outer.contains(&DateRange::new(date("2023-12-15"), date("2024-01-15"))));
}

#[test]
fn test_ensure_ordered_rejects_equal_dates() {
    let same_day = DateRange::new(date("2024-01-01"), date("2024-01-01"));

    assert!(matches!(
        same_day.ensure_ordered(),
        Err(CoreError::InvalidDateRange { .. })
    ));
}

#[test]
fn test_ensure_ordered_rejects_five_digit_years() {
    let end = chrono::NaiveDate::from_ymd_opt(10000, 1, 31).unwrap();
    let window = DateRange::new(date("9999-12-01"), end);

    let err = window.ensure_ordered().unwrap_err();

    assert!(matches!(err, CoreError::DateOutOfRange { date, .. } if date == end));
    assert!(err.user_message().contains("1 to 9999"));
}

#[test]
fn test_ensure_ordered_accepts_last_supported_year() {
    let window = DateRange::new(date("9999-12-01"), date("9999-12-31"));

    assert!(window.ensure_ordered().is_ok());
}

#[test]
fn test_parse_calendar_date_accepts_date_and_timestamp() {
    assert_eq!(
        parse_calendar_date("2024-06-30", "endDate").unwrap(),
        date("2024-06-30")
    );
    assert_eq!(
        parse_calendar_date("2024-06-30T00:00:00.000Z", "endDate").unwrap(),
        date("2024-06-30")
    );
}

#[test]
fn test_parse_calendar_date_rejects_garbage() {
    let err = parse_calendar_date("30/06/2024", "endDate").unwrap_err();

    assert_eq!(err.field().as_deref(), Some("endDate"));
}

#[test]
fn test_parse_uuid_reports_field() {
    let err = parse_uuid("not-a-uuid", "engineerId").unwrap_err();

    assert!(matches!(err, CoreError::Uuid { ref field, .. } if field == "engineerId"));
}

#[test]
fn test_validate_percentage_bounds() {
    assert_eq!(validate_percentage(0, "maxCapacity").unwrap(), 0);
    assert_eq!(validate_percentage(100, "maxCapacity").unwrap(), 100);
    assert!(validate_percentage(101, "maxCapacity").is_err());
    assert!(validate_percentage(-1, "maxCapacity").is_err());
}
