//! Text processing utilities.
//!
//! Word extraction and n-gram candidate generation for the dictionary
//! matcher.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for word tokens.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Extract lower-cased word tokens from text.
pub fn extract_words(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Generate all contiguous word sequences of length `window` down to 1,
/// concatenated into one flat candidate list.
///
/// Duplicates are allowed; the consumer treats the output as a set. Inputs
/// shorter than `window` simply yield the shorter sequences, and empty input
/// yields an empty list.
pub fn ngrams(words: &[String], window: usize) -> Vec<String> {
    let mut candidates = Vec::new();
    for n in (1..=window).rev() {
        for chunk in words.windows(n) {
            candidates.push(chunk.join(" "));
        }
    }
    candidates
}
