//! Context cue vocabularies.
//!
//! Cue words are signals that a nearby noun names a skill; they are never
//! skills themselves. `TECH_DOMAIN_CUES` is the closed technical-domain list
//! the contextual extractor scans subtrees for, distinct from the broader
//! `CONTEXT_CUES` set.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Words whose presence near a candidate noun raises confidence it is a skill.
pub static CONTEXT_CUES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "knowledge",
        "expertise",
        "proficiency",
        "experience",
        "skills",
        "responsibilities",
        "requirements",
        "familiar",
        "proficient",
        "competent",
        "background in",
        "capability",
        "capable of",
        "qualified in",
        "specialization",
    ]
    .into_iter()
    .collect()
});

/// Technical-domain cue words scanned for inside a candidate token's subtree.
pub static TECH_DOMAIN_CUES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "software",
        "technology",
        "technical",
        "programming",
        "development",
        "engineer",
        "developer",
        "code",
        "system",
        "database",
        "analysis",
        "design",
        "network",
    ]
    .into_iter()
    .collect()
});
