//! Skills as a true set of case-sensitive strings.
//!
//! Inputs arrive either as a JSON array or as one comma-delimited string. Both shapes
//! are normalized here, at the boundary, so matching logic only ever sees a set.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Split a comma-delimited string into skills. Whitespace around each skill is
    /// trimmed and empty pieces are dropped.
    pub fn from_delimited(value: &str) -> Self {
        value.split(',').map(str::to_string).collect()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    /// Skills present in both sets, in sorted order.
    pub fn intersection<'a>(&'a self, other: &'a SkillSet) -> impl Iterator<Item = &'a String> {
        self.0.intersection(&other.0)
    }

    pub fn intersects(&self, other: &SkillSet) -> bool {
        self.intersection(other).next().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsInput {
    List(Vec<String>),
    Delimited(String),
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match SkillsInput::deserialize(deserializer)? {
            SkillsInput::List(skills) => skills.into_iter().collect(),
            SkillsInput::Delimited(value) => SkillSet::from_delimited(&value),
        })
    }
}
