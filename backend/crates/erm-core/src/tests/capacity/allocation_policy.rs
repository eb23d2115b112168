use crate::{AllocationPolicy, ProjectStatus};

use std::str::FromStr;

#[test]
fn test_allocation_policy_counts() {
    assert!(AllocationPolicy::AllAssignments.counts(ProjectStatus::Planning));
    assert!(AllocationPolicy::AllAssignments.counts(ProjectStatus::Completed));
    assert!(AllocationPolicy::ActiveProjects.counts(ProjectStatus::Active));
    assert!(!AllocationPolicy::ActiveProjects.counts(ProjectStatus::Planning));
    assert!(!AllocationPolicy::ActiveProjects.counts(ProjectStatus::OnHold));
}

#[test]
fn test_allocation_policy_from_str() {
    assert_eq!(
        AllocationPolicy::from_str("all").unwrap(),
        AllocationPolicy::AllAssignments
    );
    assert_eq!(
        AllocationPolicy::from_str("active_projects").unwrap(),
        AllocationPolicy::ActiveProjects
    );
    assert!(AllocationPolicy::from_str("busy").is_err());
}

#[test]
fn test_allocation_policy_serializes_as_str() {
    for policy in [AllocationPolicy::AllAssignments, AllocationPolicy::ActiveProjects] {
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(json, format!("\"{}\"", policy.as_str()));
    }
}
