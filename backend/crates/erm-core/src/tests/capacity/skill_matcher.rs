use crate::tests::{engineer_with, project_between};
use crate::{ProjectStatus, find_suitable_engineers, matched_skills};

#[test]
fn given_project_skills_when_matching_then_any_overlap_qualifies() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);
    let a = engineer_with(100, &["React"]);
    let b = engineer_with(100, &["Java"]);
    let engineers = vec![a.clone(), b];

    let suitable = find_suitable_engineers(&project, &engineers);

    assert_eq!(suitable.len(), 1);
    assert_eq!(suitable[0].id, a.id);
}

#[test]
fn given_several_matches_when_matching_then_input_order_kept() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);
    let first = engineer_with(100, &["Node.js"]);
    let second = engineer_with(100, &["React", "Node.js", "MongoDB"]);
    let third = engineer_with(100, &["React"]);
    let engineers = vec![first.clone(), second.clone(), third.clone()];

    let ids: Vec<_> = find_suitable_engineers(&project, &engineers)
        .into_iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[test]
fn given_different_case_when_matching_then_no_match() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);
    let engineers = vec![engineer_with(100, &["react", "node.js"])];

    assert!(find_suitable_engineers(&project, &engineers).is_empty());
}

#[test]
fn test_matched_skills() {
    let project = project_between("2024-01-01", "2024-06-30", ProjectStatus::Active);
    let engineer = engineer_with(100, &["React", "Node.js", "Go"]);

    assert_eq!(matched_skills(&project, &engineer), vec!["Node.js", "React"]);
}
