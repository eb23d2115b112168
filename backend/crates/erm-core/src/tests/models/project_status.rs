use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Planning.as_str(), "planning");
    assert_eq!(ProjectStatus::Active.as_str(), "active");
    assert_eq!(ProjectStatus::Completed.as_str(), "completed");
    assert_eq!(ProjectStatus::OnHold.as_str(), "on-hold");
}

#[test]
fn test_project_status_from_str_accepts_both_on_hold_spellings() {
    assert_eq!(ProjectStatus::from_str("on-hold").unwrap(), ProjectStatus::OnHold);
    assert_eq!(ProjectStatus::from_str("on_hold").unwrap(), ProjectStatus::OnHold);
    assert!(ProjectStatus::from_str("cancelled").is_err());
}

#[test]
fn test_project_status_serde() {
    let json = serde_json::to_string(&ProjectStatus::OnHold).unwrap();
    assert_eq!(json, "\"on-hold\"");

    let parsed: ProjectStatus = serde_json::from_str("\"active\"").unwrap();
    assert_eq!(parsed, ProjectStatus::Active);
}
