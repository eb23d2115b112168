use crate::tests::engineer_with;
use crate::{Engineer, EngineerPatch, Seniority, SkillSet, UserRole};

#[test]
fn test_engineer_new_validates_max_capacity() {
    let result = Engineer::new(
        "Bob Wilson".to_string(),
        "bob@example.com".to_string(),
        SkillSet::from_delimited("Java, Spring Boot"),
        Seniority::Junior,
        150,
        "Engineering".to_string(),
    );

    assert!(result.is_err());
}

#[test]
fn test_engineer_role_is_engineer() {
    let engineer = engineer_with(100, &["Rust"]);

    assert_eq!(engineer.role(), UserRole::Engineer);
}

#[test]
fn test_engineer_patch_apply() {
    let engineer = engineer_with(100, &["Rust"]);
    let patch = EngineerPatch {
        seniority: Some(Seniority::Senior),
        skills: Some(SkillSet::from_delimited("Rust, Go")),
        ..Default::default()
    };

    let updated = patch.apply(&engineer).unwrap();

    assert_eq!(updated.id, engineer.id);
    assert_eq!(updated.name, engineer.name);
    assert_eq!(updated.seniority, Seniority::Senior);
    assert!(updated.skills.contains("Go"));
}

#[test]
fn test_engineer_patch_lowers_capacity() {
    let engineer = engineer_with(100, &[]);

    let lower = EngineerPatch {
        max_capacity: Some(50),
        ..Default::default()
    };
    let higher = EngineerPatch {
        max_capacity: Some(100),
        ..Default::default()
    };

    assert!(lower.lowers_capacity(&engineer));
    assert!(!higher.lowers_capacity(&engineer));
    assert!(!EngineerPatch::default().lowers_capacity(&engineer));
}
