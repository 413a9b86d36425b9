//! The skill lexicon.
//!
//! An explicitly constructed, immutable reference-data object passed into the
//! engine at construction time. Default tables come from [`crate::dictionaries`];
//! builder methods and config extensions add entries before the lexicon is
//! handed to the engine, never after.

use std::collections::{HashMap, HashSet};

use crate::config::Config;
use crate::dictionaries::{
    acronyms::ACRONYMS, cues::CONTEXT_CUES, cues::TECH_DOMAIN_CUES, known_skills::KNOWN_SKILLS,
    stoplist::STOPLIST,
};

/// Immutable skill reference data.
///
/// Cheap to share by reference; safe across threads without synchronization
/// since nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    known_skills: HashSet<String>,
    acronyms: HashMap<String, String>,
    context_cues: HashSet<String>,
    tech_cues: HashSet<String>,
    stoplist: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            known_skills: KNOWN_SKILLS.iter().map(|s| (*s).to_string()).collect(),
            acronyms: ACRONYMS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            context_cues: CONTEXT_CUES.iter().map(|s| (*s).to_string()).collect(),
            tech_cues: TECH_DOMAIN_CUES.iter().map(|s| (*s).to_string()).collect(),
            stoplist: STOPLIST.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// An empty lexicon. Useful for tests that want full control over
    /// every table.
    pub fn empty() -> Self {
        Self {
            known_skills: HashSet::new(),
            acronyms: HashMap::new(),
            context_cues: HashSet::new(),
            tech_cues: HashSet::new(),
            stoplist: HashSet::new(),
        }
    }

    /// Build the default lexicon extended with entries from `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut lexicon = Self::default();
        if let Some(ref skills) = config.extra_skills {
            lexicon = lexicon.with_skills(skills.iter().map(String::as_str));
        }
        if let Some(ref stopwords) = config.extra_stopwords {
            lexicon = lexicon.with_stopwords(stopwords.iter().map(String::as_str));
        }
        if let Some(ref acronyms) = config.extra_acronyms {
            lexicon = lexicon.with_acronyms(acronyms.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        if let Some(ref cues) = config.extra_cues {
            lexicon = lexicon.with_cues(cues.iter().map(String::as_str));
        }
        tracing::debug!(
            skills = lexicon.known_skills.len(),
            acronyms = lexicon.acronyms.len(),
            stoplist = lexicon.stoplist.len(),
            "lexicon assembled"
        );
        lexicon
    }

    /// Add known skill terms (normalized to lower-case).
    pub fn with_skills<'a>(mut self, skills: impl IntoIterator<Item = &'a str>) -> Self {
        self.known_skills
            .extend(skills.into_iter().map(str::to_lowercase));
        self
    }

    /// Add stoplist entries (normalized to lower-case).
    pub fn with_stopwords<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        self.stoplist
            .extend(words.into_iter().map(str::to_lowercase));
        self
    }

    /// Add acronym expansions (both sides normalized to lower-case).
    pub fn with_acronyms<'a>(
        mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        self.acronyms.extend(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase())),
        );
        self
    }

    /// Add context cue words (normalized to lower-case).
    pub fn with_cues<'a>(mut self, cues: impl IntoIterator<Item = &'a str>) -> Self {
        self.context_cues
            .extend(cues.into_iter().map(str::to_lowercase));
        self
    }

    /// Whether `term` is a canonical skill.
    pub fn is_known_skill(&self, term: &str) -> bool {
        self.known_skills.contains(term)
    }

    /// Whether `term` is on the stoplist and must never be a skill.
    pub fn is_stoplisted(&self, term: &str) -> bool {
        self.stoplist.contains(term)
    }

    /// Whether `term` is a context cue (a signal, never a skill).
    pub fn is_context_cue(&self, term: &str) -> bool {
        self.context_cues.contains(term)
    }

    /// Whether `term` is a technical-domain cue word.
    pub fn is_tech_cue(&self, term: &str) -> bool {
        self.tech_cues.contains(term)
    }

    /// The full-form expansion of `term`, if it is a known acronym.
    pub fn expand_acronym(&self, term: &str) -> Option<&str> {
        self.acronyms.get(term).map(String::as_str)
    }
}
