//! Acronym expansions.
//!
//! Short technical abbreviations mapped to their full phrase. Both forms are
//! independently matchable skills.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Acronym → full-form expansions.
pub static ACRONYMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("ai", "artificial intelligence"),
        ("ml", "machine learning"),
        ("dl", "deep learning"),
        ("ds", "data science"),
        ("oop", "object oriented programming"),
        ("ui", "user interface"),
        ("ux", "user experience"),
        ("api", "application programming interface"),
        ("sdk", "software development kit"),
        ("saas", "software as a service"),
        ("paas", "platform as a service"),
        ("iaas", "infrastructure as a service"),
        ("dba", "database administrator"),
        ("devops", "development operations"),
        ("sre", "site reliability engineering"),
        ("tdd", "test driven development"),
        ("ci", "continuous integration"),
        ("cd", "continuous deployment"),
        ("qa", "quality assurance"),
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ml_expands_to_machine_learning() {
        assert_eq!(ACRONYMS.get("ml"), Some(&"machine learning"));
    }

    #[test]
    fn keys_are_lower_case() {
        for (short, long) in ACRONYMS.iter() {
            assert_eq!(*short, short.to_lowercase());
            assert_eq!(*long, long.to_lowercase());
        }
    }
}
