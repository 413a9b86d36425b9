//! Skill sets and match reports.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use in
//! CLI JSON output and downstream consumers.

use std::collections::BTreeSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An ordered set of lower-case skill strings.
///
/// Deduplicated and lexicographically sorted by construction; serializes as a
/// sorted sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// An empty skill set.
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a skill. Duplicates are ignored.
    pub fn insert(&mut self, skill: impl Into<String>) {
        self.0.insert(skill.into());
    }

    /// Whether `skill` is a member.
    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    /// Number of skills.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate members in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of skills shared with `other`.
    pub fn common_count(&self, other: &Self) -> usize {
        self.0.intersection(&other.0).count()
    }

    /// Skills in `self` but not in `other`, in lexicographic order.
    pub fn missing_from<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a str> {
        self.0.difference(&other.0).map(String::as_str)
    }

    /// The members as a sorted vector.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Result of matching a résumé against a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatchReport {
    /// Weighted match percentage in [0, 100], one decimal place.
    pub match_percentage: f64,
    /// Skills extracted from the résumé, sorted lexicographically.
    pub resume_skills: Vec<String>,
    /// Skills extracted from the job description, sorted lexicographically.
    pub job_skills: Vec<String>,
    /// Job skills absent from the résumé, ordered by descending importance
    /// (occurrence count in the job description).
    pub missing_skills: Vec<String>,
}
