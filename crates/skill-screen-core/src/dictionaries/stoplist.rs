//! Generic-term stoplist.
//!
//! Words and phrases that must never be classified as skills. Applied as the
//! final resolver filter, overriding every other signal.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Generic words that must never appear in a skill set.
pub static STOPLIST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // General terms
    set.extend([
        "use", "work", "year", "time", "new", "one", "two", "three", "day", "week", "month",
        "set", "lot", "way", "support", "help", "create", "build", "make", "high", "low", "good",
        "great", "job", "need", "role",
    ]);

    // Job-description boilerplate (signals, not skills)
    set.extend([
        "knowledge",
        "expertise",
        "proficiency",
        "responsibilities",
        "requirements",
        "experience",
        "familiar",
        "proficient",
        "ability",
        "skill",
        "skills",
        "understanding",
        "concepts",
        "qualification",
        "qualifications",
        "degree",
        "background",
        "professional",
        "candidate",
        "candidates",
        "position",
        "strong",
        "excellent",
        "outstanding",
        "exceptional",
        "proven",
        "track",
        "record",
        "history",
        "demonstrated",
        "solid",
        "robust",
        "competent",
    ]);

    // Additional filter terms
    set.extend([
        "using",
        "working",
        "developing",
        "creating",
        "managing",
        "leading",
        "team",
        "member",
        "responsible",
        "responsibility",
        "resume",
        "cv",
        "application",
        "apply",
        "information",
        "company",
        "business",
        "industry",
        "solution",
        "services",
        "products",
        "client",
        "customer",
        "user",
        "various",
        "multiple",
        "several",
        "many",
        "few",
        "some",
        "all",
        "able",
        "capable",
        "required",
        "preferred",
        "desired",
        "ideal",
        "necessary",
        "mandatory",
        "optional",
        "plus",
        "bonus",
        "employment",
        "career",
        "opportunity",
        "level",
        "entry",
        "senior",
        "junior",
        "mid",
        "lead",
        "years",
        "education",
        "bachelor",
        "master",
        "phd",
        "hour",
        "deadline",
        "schedule",
        "task",
        "perform",
        "self",
        "motivated",
        "motivation",
        "enthusiasm",
        "enthusiastic",
        "passionate",
        "passion",
        "drive",
        "driven",
        "commitment",
        "committed",
        "looking",
        "searching",
        "seeking",
        "want",
        "wanted",
        "desire",
    ]);

    set
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_words_present() {
        assert!(STOPLIST.contains("experience"));
        assert!(STOPLIST.contains("skills"));
        assert!(STOPLIST.contains("team"));
    }

    #[test]
    fn real_skills_absent() {
        assert!(!STOPLIST.contains("python"));
        assert!(!STOPLIST.contains("machine learning"));
    }
}
