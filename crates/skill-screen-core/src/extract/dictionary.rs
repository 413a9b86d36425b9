//! Dictionary matching over n-gram candidates.

use std::collections::HashSet;

use crate::lexicon::Lexicon;

/// Match candidate n-grams against the lexicon's skill and acronym tables.
///
/// Pure set membership; no partial or fuzzy matching. An acronym hit adds
/// both the acronym and its expansion, each independently subject to the
/// stoplist.
pub fn match_candidates(candidates: &[String], lexicon: &Lexicon) -> HashSet<String> {
    let mut matched = HashSet::new();

    for candidate in candidates {
        if lexicon.is_stoplisted(candidate) {
            continue;
        }
        if lexicon.is_known_skill(candidate) {
            matched.insert(candidate.clone());
        }
        if let Some(expansion) = lexicon.expand_acronym(candidate) {
            matched.insert(candidate.clone());
            if !lexicon.is_stoplisted(expansion) {
                matched.insert(expansion.to_string());
            }
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn matches_known_skills() {
        let lexicon = Lexicon::default();
        let matched = match_candidates(&candidates(&["python", "react", "plumbing"]), &lexicon);
        assert!(matched.contains("python"));
        assert!(matched.contains("react"));
        assert!(!matched.contains("plumbing"));
    }

    #[test]
    fn matches_multi_word_skills() {
        let lexicon = Lexicon::default();
        let matched = match_candidates(&candidates(&["machine learning"]), &lexicon);
        assert!(matched.contains("machine learning"));
    }

    #[test]
    fn acronym_adds_both_forms() {
        let lexicon = Lexicon::default();
        let matched = match_candidates(&candidates(&["ml"]), &lexicon);
        assert!(matched.contains("ml"));
        assert!(matched.contains("machine learning"));
    }

    #[test]
    fn stoplisted_candidates_are_skipped() {
        let lexicon = Lexicon::empty()
            .with_skills(["experience"])
            .with_stopwords(["experience"]);
        let matched = match_candidates(&candidates(&["experience"]), &lexicon);
        assert!(matched.is_empty());
    }

    #[test]
    fn stoplisted_expansion_is_withheld() {
        let lexicon = Lexicon::empty()
            .with_acronyms([("pm", "project management")])
            .with_stopwords(["project management"]);
        let matched = match_candidates(&candidates(&["pm"]), &lexicon);
        assert!(matched.contains("pm"));
        assert!(!matched.contains("project management"));
    }
}
