//! Rule-based annotation backend.
//!
//! A deterministic approximation of a dependency-parsing annotator, good
//! enough to drive the contextual extractor when no external NLP service is
//! wired in. Noun detection is intentionally permissive; precision comes from
//! the extractor's cue-proximity requirement and the resolver's stoplist.

use regex::Regex;
use std::sync::LazyLock;

use super::{Annotator, PartOfSpeech, Token};
use crate::dictionaries::function_words::FUNCTION_WORDS;
use crate::error::AnnotationError;

/// Regex for word tokens, preserving original case.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Adverb suffix that disqualifies a word from nounhood.
const ADVERB_SUFFIX: &str = "ly";

/// Deterministic rule-based [`Annotator`].
///
/// - Stopword flags come from the function-word table.
/// - A capitalized word that is not sentence-initial is a proper noun.
/// - Any other non-stopword, non-numeric word is a noun.
/// - A token's subtree is its containing sentence — a locality window
///   approximating the dependency subtree a full parser would produce.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnnotator;

impl HeuristicAnnotator {
    /// Create a new heuristic annotator.
    pub const fn new() -> Self {
        Self
    }

    fn classify(word: &str, sentence_initial: bool, is_stop: bool) -> PartOfSpeech {
        if is_stop || word.chars().all(|c| c.is_ascii_digit()) {
            return PartOfSpeech::Other;
        }
        let lower = word.to_lowercase();
        if lower.ends_with(ADVERB_SUFFIX) {
            return PartOfSpeech::Other;
        }
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_initial {
            PartOfSpeech::ProperNoun
        } else {
            PartOfSpeech::Noun
        }
    }
}

impl Annotator for HeuristicAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotationError> {
        let mut tokens = Vec::new();
        let mut sentence_spans: Vec<(usize, usize)> = Vec::new();

        for sentence in text.split(['.', '!', '?', '\n']) {
            let start = tokens.len();
            for (i, m) in WORD_PATTERN.find_iter(sentence).enumerate() {
                let word = m.as_str();
                let lower = word.to_lowercase();
                let is_stop = FUNCTION_WORDS.contains(lower.as_str());
                let pos = Self::classify(word, i == 0, is_stop);
                tokens.push(Token::new(word, pos).stopword(is_stop));
            }
            let end = tokens.len();
            if end > start {
                sentence_spans.push((start, end));
            }
        }

        // Sentence-window subtrees.
        for (start, end) in sentence_spans {
            let indices: Vec<usize> = (start..end).collect();
            for token in &mut tokens[start..end] {
                token.subtree = indices.clone();
            }
        }

        Ok(tokens)
    }
}
