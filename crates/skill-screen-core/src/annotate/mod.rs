//! Linguistic annotation interface.
//!
//! The contextual extractor consumes annotated tokens: part-of-speech class,
//! stopword flag, and syntactic-subtree membership. The [`Annotator`] trait
//! keeps the extraction algorithm independent of any particular NLP backend;
//! tests drive it with hand-constructed token sequences, and the CLI uses the
//! built-in [`HeuristicAnnotator`].

mod heuristic;

pub use heuristic::HeuristicAnnotator;

use crate::error::AnnotationError;

/// Part-of-speech class of a token. Only the distinctions the extractor
/// cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    /// Common noun.
    Noun,
    /// Proper noun.
    ProperNoun,
    /// Everything else.
    Other,
}

impl PartOfSpeech {
    /// Whether this class is a noun or proper noun.
    pub const fn is_nominal(&self) -> bool {
        matches!(self, Self::Noun | Self::ProperNoun)
    }
}

/// A word as annotated by the linguistic backend.
#[derive(Debug, Clone)]
pub struct Token {
    /// The token text as it appeared in the input.
    pub text: String,
    /// Part-of-speech class.
    pub pos: PartOfSpeech,
    /// Whether the backend flags this as a stopword.
    pub is_stop: bool,
    /// Indices (into the token sequence) of this token plus its syntactic
    /// dependents. Always contains the token's own index.
    pub subtree: Vec<usize>,
}

impl Token {
    /// Construct a token with an empty subtree and no stopword flag.
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
            is_stop: false,
            subtree: Vec::new(),
        }
    }

    /// Set the stopword flag.
    #[must_use]
    pub const fn stopword(mut self, is_stop: bool) -> Self {
        self.is_stop = is_stop;
        self
    }

    /// Set the subtree indices.
    #[must_use]
    pub fn with_subtree(mut self, subtree: Vec<usize>) -> Self {
        self.subtree = subtree;
        self
    }
}

/// A linguistic-annotation backend.
///
/// Implementations must be deterministic for identical input; `analyze`
/// relies on this for idempotent results.
pub trait Annotator: Send + Sync {
    /// Annotate `text` into a token sequence.
    fn annotate(&self, text: &str) -> Result<Vec<Token>, AnnotationError>;
}
