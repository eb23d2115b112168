use crate::{Engineer, Project};

/// Engineers sharing at least one skill with the project's required skills.
///
/// Any overlap qualifies; full coverage is not required. Results keep the input
/// order of `engineers` and are not ranked.
pub fn find_suitable_engineers<'a>(project: &Project, engineers: &'a [Engineer]) -> Vec<&'a Engineer> {
    engineers
        .iter()
        .filter(|engineer| engineer.skills.intersects(&project.required_skills))
        .collect()
}

/// Required skills the engineer has, sorted.
pub fn matched_skills(project: &Project, engineer: &Engineer) -> Vec<String> {
    engineer
        .skills
        .intersection(&project.required_skills)
        .cloned()
        .collect()
}
