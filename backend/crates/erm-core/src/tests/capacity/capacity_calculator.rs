use crate::tests::{booking, engineer_with};
use crate::{
    AllocationPolicy, CapacitySummary, ProjectStatus, StaffedAssignment, available_capacity,
    compute_allocation,
};

use uuid::Uuid;

fn staffed(engineer_id: Uuid, allocation: i32, status: ProjectStatus) -> StaffedAssignment {
    StaffedAssignment {
        assignment: booking(engineer_id, allocation, "2024-01-01", "2024-06-30"),
        project_name: "Platform".to_string(),
        project_status: status,
    }
}

#[test]
fn given_mixed_project_statuses_when_all_policy_then_sums_everything() {
    let engineer = engineer_with(100, &[]);
    let assignments = vec![
        staffed(engineer.id, 30, ProjectStatus::Active),
        staffed(engineer.id, 20, ProjectStatus::Planning),
        staffed(engineer.id, 10, ProjectStatus::Completed),
    ];

    let allocation = compute_allocation(engineer.id, &assignments, AllocationPolicy::AllAssignments);

    assert_eq!(allocation, 60);
}

#[test]
fn given_mixed_project_statuses_when_active_policy_then_sums_active_only() {
    let engineer = engineer_with(100, &[]);
    let assignments = vec![
        staffed(engineer.id, 30, ProjectStatus::Active),
        staffed(engineer.id, 20, ProjectStatus::Planning),
        staffed(engineer.id, 25, ProjectStatus::Active),
    ];

    let allocation = compute_allocation(engineer.id, &assignments, AllocationPolicy::ActiveProjects);

    assert_eq!(allocation, 55);
}

#[test]
fn given_same_inputs_when_computed_twice_then_same_result() {
    let engineer = engineer_with(100, &[]);
    let assignments = vec![
        staffed(engineer.id, 40, ProjectStatus::Active),
        staffed(Uuid::new_v4(), 70, ProjectStatus::Active),
    ];

    let first = compute_allocation(engineer.id, &assignments, AllocationPolicy::ActiveProjects);
    let second = compute_allocation(engineer.id, &assignments, AllocationPolicy::ActiveProjects);

    assert_eq!(first, second);
    assert_eq!(first, 40);
}

#[test]
fn test_available_capacity_never_negative() {
    assert_eq!(available_capacity(100, 40), 60);
    assert_eq!(available_capacity(50, 80), 0);
    assert_eq!(available_capacity(0, 0), 0);
}

#[test]
fn test_capacity_summary_compute() {
    let engineer = engineer_with(80, &[]);
    let assignments = vec![staffed(engineer.id, 50, ProjectStatus::Active)];

    let summary = CapacitySummary::compute(&engineer, &assignments, AllocationPolicy::ActiveProjects);

    assert_eq!(summary.engineer_id, engineer.id);
    assert_eq!(summary.max_capacity, 80);
    assert_eq!(summary.current_allocation, 50);
    assert_eq!(summary.available_capacity, 30);
    assert_eq!(summary.policy, AllocationPolicy::ActiveProjects);
}
