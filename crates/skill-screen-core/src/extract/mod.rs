//! The skill-extraction pipeline.
//!
//! One linear pass: n-gram candidates through the dictionary matcher,
//! annotated tokens through the contextual extractor, experience-phrase
//! captures from the raw text, then a single resolver boundary that enforces
//! the output invariants.

pub mod contextual;
pub mod dictionary;
pub mod resolver;

use crate::annotate::Annotator;
use crate::error::AnalysisResult;
use crate::lexicon::Lexicon;
use crate::report::SkillSet;
use crate::text;

/// Extract the skill set of `input`.
///
/// Empty input yields an empty set; upstream text extraction may
/// legitimately produce no text, and that is the caller's condition to
/// report, not this function's.
#[tracing::instrument(skip_all, fields(text_len = input.len()))]
pub fn extract_skills(
    input: &str,
    lexicon: &Lexicon,
    annotator: &dyn Annotator,
    window: usize,
) -> AnalysisResult<SkillSet> {
    if input.trim().is_empty() {
        return Ok(SkillSet::new());
    }

    let lower = input.to_lowercase();
    let words = text::extract_words(input);
    let candidates = text::ngrams(&words, window);

    let mut merged = dictionary::match_candidates(&candidates, lexicon);

    let tokens = annotator.annotate(input)?;
    merged.extend(contextual::extract(&tokens, lexicon));
    merged.extend(contextual::experience_skills(&lower, lexicon));

    let resolved = resolver::resolve(merged, lexicon);
    tracing::debug!(skills = resolved.len(), "extraction complete");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::HeuristicAnnotator;

    fn extract(text: &str) -> SkillSet {
        let lexicon = Lexicon::default();
        extract_skills(text, &lexicon, &HeuristicAnnotator::new(), 3).unwrap()
    }

    #[test]
    fn known_skills_at_word_boundaries_are_found() {
        let skills = extract("Experience with python and react");
        assert!(skills.contains("python"));
        assert!(skills.contains("react"));
    }

    #[test]
    fn acronym_yields_both_forms() {
        let skills = extract("Familiar with ml pipelines");
        assert!(skills.contains("ml"));
        assert!(skills.contains("machine learning"));
    }

    #[test]
    fn substring_skill_suppressed_by_longer_match() {
        // "data" qualifies contextually (the "engineer" cue sits in its
        // sentence subtree) and "data science" matches the dictionary; the
        // resolver keeps only the longer phrase.
        let skills = extract("data engineer with data science skills");
        assert!(skills.contains("data science"));
        assert!(!skills.contains("data"));
    }

    #[test]
    fn experience_phrase_is_captured() {
        let skills = extract("We require 3+ years of cloud infrastructure experience.");
        assert!(skills.contains("cloud infrastructure"));
    }

    #[test]
    fn stoplist_never_leaks() {
        let skills = extract(
            "Strong experience and excellent skills required. \
             Proven track record with python.",
        );
        let lexicon = Lexicon::default();
        for skill in skills.iter() {
            assert!(!lexicon.is_stoplisted(skill), "stoplisted: {skill}");
        }
        assert!(skills.contains("python"));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(extract("").is_empty());
        assert!(extract("   \n").is_empty());
    }
}
