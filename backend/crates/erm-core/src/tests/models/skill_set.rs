use crate::SkillSet;

#[test]
fn test_from_delimited_trims_and_drops_empty() {
    let skills = SkillSet::from_delimited(" React , Node.js,, ");

    assert_eq!(skills.to_vec(), vec!["Node.js", "React"]);
}

#[test]
fn test_duplicates_collapse() {
    let skills: SkillSet = ["Go", "Go", "Rust"].into_iter().collect();

    assert_eq!(skills.len(), 2);
}

#[test]
fn test_hyphenated_skill_stays_whole() {
    let skills = SkillSet::from_delimited("Spring-Boot, CI-CD");

    assert!(skills.contains("Spring-Boot"));
    assert!(skills.contains("CI-CD"));
}

#[test]
fn test_deserialize_from_array_or_string() {
    let from_array: SkillSet = serde_json::from_str(r#"["React", "Node.js"]"#).unwrap();
    let from_string: SkillSet = serde_json::from_str(r#""React, Node.js""#).unwrap();

    assert_eq!(from_array, from_string);
    assert_eq!(serde_json::to_string(&from_array).unwrap(), r#"["Node.js","React"]"#);
}
