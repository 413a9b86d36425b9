//! Contextual skill extraction from annotated tokens.
//!
//! Accepts nouns and proper nouns that sit near technical context, plus
//! skills named in "N years of X experience" phrasing.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::annotate::Token;
use crate::lexicon::Lexicon;

/// Regex for "<N>[+] year(s)/yr(s) [of] <1-3 words> experience" phrases.
/// Applied to lower-cased text.
static EXPERIENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\+?\s+(?:years?|yrs?)(?:\s+of)?\s+(\w+(?:\s+\w+){0,2})\s+experience")
        .expect("valid regex")
});

/// Minimum character length for a skill candidate.
const MIN_CANDIDATE_LEN: usize = 3;

/// Extract skill candidates from annotated tokens.
///
/// A token qualifies when it is a noun or proper noun, not a stopword, at
/// least three characters long, and either already a known skill or
/// accompanied by a technical-domain or context cue somewhere in its
/// syntactic subtree. Cue words themselves never qualify.
pub fn extract(tokens: &[Token], lexicon: &Lexicon) -> HashSet<String> {
    let mut found = HashSet::new();

    for token in tokens {
        let lower = token.text.to_lowercase();

        // Cues are signals, never skills.
        if lexicon.is_context_cue(&lower) || lexicon.is_stoplisted(&lower) {
            continue;
        }
        if !token.pos.is_nominal() || token.is_stop || lower.chars().count() < MIN_CANDIDATE_LEN {
            continue;
        }

        let has_tech_context = token.subtree.iter().any(|&i| {
            tokens.get(i).is_some_and(|related| {
                let related_lower = related.text.to_lowercase();
                lexicon.is_tech_cue(&related_lower) || lexicon.is_context_cue(&related_lower)
            })
        });

        if has_tech_context || lexicon.is_known_skill(&lower) {
            found.insert(lower);
        }
    }

    found
}

/// Extract skills named in experience phrases from lower-cased text.
///
/// "3+ years of cloud infrastructure experience" yields "cloud
/// infrastructure". Captures shorter than three characters or on the
/// stoplist are discarded.
pub fn experience_skills(lower_text: &str, lexicon: &Lexicon) -> HashSet<String> {
    EXPERIENCE_PATTERN
        .captures_iter(lower_text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|span| span.chars().count() >= MIN_CANDIDATE_LEN && !lexicon.is_stoplisted(span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::PartOfSpeech;

    fn noun(text: &str) -> Token {
        Token::new(text, PartOfSpeech::Noun)
    }

    #[test]
    fn noun_near_tech_cue_is_accepted() {
        let lexicon = Lexicon::default();
        // "splunk" is not in the default skill table; the "engineer" cue
        // in its subtree is what qualifies it.
        let tokens = vec![
            noun("splunk").with_subtree(vec![0, 1]),
            noun("engineer").with_subtree(vec![0, 1]),
        ];
        let found = extract(&tokens, &lexicon);
        assert!(found.contains("splunk"));
    }

    #[test]
    fn noun_without_context_or_dictionary_hit_is_rejected() {
        let lexicon = Lexicon::default();
        let tokens = vec![noun("gardening").with_subtree(vec![0])];
        let found = extract(&tokens, &lexicon);
        assert!(found.is_empty());
    }

    #[test]
    fn known_skill_needs_no_context() {
        let lexicon = Lexicon::default();
        let tokens = vec![noun("python").with_subtree(vec![0])];
        let found = extract(&tokens, &lexicon);
        assert!(found.contains("python"));
    }

    #[test]
    fn cue_words_are_never_skills() {
        let lexicon = Lexicon::default();
        let tokens = vec![
            noun("proficiency").with_subtree(vec![0, 1]),
            noun("database").with_subtree(vec![0, 1]),
        ];
        let found = extract(&tokens, &lexicon);
        assert!(!found.contains("proficiency"));
    }

    #[test]
    fn short_and_stopword_tokens_are_rejected() {
        let lexicon = Lexicon::default();
        let tokens = vec![
            noun("go").with_subtree(vec![0, 1, 2]),
            noun("engineer").with_subtree(vec![0, 1, 2]),
            noun("sql").stopword(true).with_subtree(vec![0, 1, 2]),
        ];
        let found = extract(&tokens, &lexicon);
        assert!(!found.contains("go"));
        assert!(!found.contains("sql"));
    }

    #[test]
    fn non_nominal_tokens_are_rejected() {
        let lexicon = Lexicon::default();
        let tokens = vec![
            Token::new("deploying", PartOfSpeech::Other).with_subtree(vec![0, 1]),
            noun("engineer").with_subtree(vec![0, 1]),
        ];
        let found = extract(&tokens, &lexicon);
        assert!(!found.contains("deploying"));
    }

    #[test]
    fn experience_phrase_captures_skill_span() {
        let lexicon = Lexicon::default();
        let found = experience_skills("3+ years of cloud infrastructure experience", &lexicon);
        assert!(found.contains("cloud infrastructure"));
    }

    #[test]
    fn experience_phrase_variants() {
        let lexicon = Lexicon::default();
        assert!(experience_skills("5 yrs kubernetes experience", &lexicon)
            .contains("kubernetes"));
        assert!(experience_skills("2 years of react experience", &lexicon).contains("react"));
    }

    #[test]
    fn bare_years_of_experience_yields_nothing() {
        let lexicon = Lexicon::default();
        // The only capturable span is "of", which is too short.
        assert!(experience_skills("3 years of experience", &lexicon).is_empty());
    }
}
