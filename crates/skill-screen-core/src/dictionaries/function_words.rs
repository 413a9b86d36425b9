//! Function words for stopword flagging.
//!
//! Glue words (articles, prepositions, auxiliaries) used by the heuristic
//! annotator to set the stopword flag on tokens. Separate from the skill
//! [`stoplist`](super::stoplist), which filters extraction output.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common glue/function words (the, a, and, or, etc.).
pub static FUNCTION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "up", "about", "into", "through", "during", "that", "this", "these", "those", "it",
        "its", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "should", "could", "may", "might", "must", "can", "which",
        "who", "when", "where", "why", "how", "if", "than", "then", "as", "so", "we", "you",
        "our", "your", "they", "their",
    ]
    .into_iter()
    .collect()
});
