//! Skill set resolution.
//!
//! The single filter boundary of the pipeline. Owns two invariants the rest
//! of the crate relies on without re-checking: no retained skill is a strict
//! sub-phrase of another retained skill, and no stoplist member survives.

use std::collections::HashSet;

use crate::lexicon::Lexicon;
use crate::report::SkillSet;

/// Resolve merged candidates into the final skill set.
///
/// A candidate is dropped when another candidate contains it as a contiguous
/// substring and has strictly more space-separated words ("data" falls to
/// "data science"; "java" survives "javascript" since both are one word).
/// Stoplist members are removed last, catching entries introduced by acronym
/// expansion or experience-phrase capture.
pub fn resolve(candidates: HashSet<String>, lexicon: &Lexicon) -> SkillSet {
    candidates
        .iter()
        .filter(|skill| !is_subsumed(skill, &candidates))
        .filter(|skill| !lexicon.is_stoplisted(skill))
        .map(String::as_str)
        .collect()
}

/// Whether a longer multi-word candidate subsumes `skill`.
fn is_subsumed(skill: &str, candidates: &HashSet<String>) -> bool {
    let word_count = skill.split_whitespace().count();
    candidates.iter().any(|other| {
        other != skill
            && other.contains(skill)
            && other.split_whitespace().count() > word_count
    })
}
