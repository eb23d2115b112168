use crate::tests::{date, project_between};
use crate::{CoreError, Project, ProjectPatch, ProjectStatus, SkillSet};

use uuid::Uuid;

#[test]
fn test_project_new_requires_ordered_window() {
    let result = Project::new(
        "Analytics".to_string(),
        String::new(),
        date("2024-08-31"),
        date("2024-02-01"),
        SkillSet::new(),
        3,
        ProjectStatus::Planning,
        Uuid::new_v4(),
    );

    assert!(matches!(result, Err(CoreError::InvalidDateRange { .. })));
}

#[test]
fn test_project_ownership_and_activity() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);

    assert!(project.is_active());
    assert!(project.is_managed_by(project.manager_id));
    assert!(!project.is_managed_by(Uuid::new_v4()));
}

#[test]
fn test_project_patch_apply_rechecks_window() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Planning);
    let patch = ProjectPatch {
        end_date: Some(date("2023-12-31")),
        ..Default::default()
    };

    assert!(patch.touches_window());
    assert!(patch.apply(&project).is_err());
}

#[test]
fn test_project_patch_status_change() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Planning);
    let patch = ProjectPatch {
        status: Some(ProjectStatus::OnHold),
        ..Default::default()
    };

    let updated = patch.apply(&project).unwrap();

    assert!(!patch.touches_window());
    assert_eq!(updated.status, ProjectStatus::OnHold);
    assert_eq!(updated.window(), project.window());
}
