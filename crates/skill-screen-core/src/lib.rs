//! Core library for skill-screen.
//!
//! Matches a candidate's résumé against a job description by extracting a
//! normalized skill vocabulary from each text and scoring the overlap.
//!
//! # Modules
//!
//! - [`lexicon`] - Skill reference data (known skills, acronyms, cues, stoplist)
//! - [`annotate`] - Linguistic-annotation interface and heuristic backend
//! - [`extract`] - The skill-extraction pipeline
//! - [`score`] - Match scoring and missing-skill ranking
//! - [`engine`] - The public [`MatchEngine`] entry point
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use skill_screen_core::{Lexicon, MatchEngine};
//!
//! let engine = MatchEngine::new(Lexicon::default());
//! let report = engine
//!     .analyze(
//!         "Looking for python and sql developers",
//!         "Shipped python services",
//!     )
//!     .expect("annotation cannot fail with the built-in backend");
//!
//! assert_eq!(report.match_percentage, 50.0);
//! assert_eq!(report.missing_skills, vec!["sql"]);
//! ```
#![deny(unsafe_code)]

pub mod annotate;
pub mod config;
pub mod dictionaries;
pub mod engine;
pub mod error;
pub mod extract;
pub mod lexicon;
pub mod report;
pub mod score;
pub mod text;

pub use config::{Config, ConfigLoader, LogLevel};
pub use engine::MatchEngine;
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use lexicon::Lexicon;
pub use report::{MatchReport, SkillSet};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
