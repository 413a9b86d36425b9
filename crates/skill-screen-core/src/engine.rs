//! The match engine.
//!
//! Binds a [`Lexicon`] and an [`Annotator`] and exposes the two public
//! operations: skill extraction for one text, and the full résumé /
//! job-description analysis.

use crate::annotate::{Annotator, HeuristicAnnotator};
use crate::error::AnalysisResult;
use crate::extract;
use crate::lexicon::Lexicon;
use crate::report::{MatchReport, SkillSet};
use crate::score;

/// Default n-gram window.
pub const DEFAULT_NGRAM_WINDOW: usize = 3;

/// Skill extraction and matching engine.
///
/// Stateless per call; the lexicon is immutable after construction, so a
/// single engine can serve concurrent callers by shared reference.
pub struct MatchEngine {
    lexicon: Lexicon,
    annotator: Box<dyn Annotator>,
    window: usize,
}

impl MatchEngine {
    /// Create an engine over `lexicon` with the built-in heuristic annotator.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            annotator: Box::new(HeuristicAnnotator::new()),
            window: DEFAULT_NGRAM_WINDOW,
        }
    }

    /// Swap the annotation backend.
    #[must_use]
    pub fn with_annotator(mut self, annotator: Box<dyn Annotator>) -> Self {
        self.annotator = annotator;
        self
    }

    /// Override the n-gram window (minimum 1).
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Extract the skill set of a single text.
    pub fn extract_skills(&self, text: &str) -> AnalysisResult<SkillSet> {
        extract::extract_skills(text, &self.lexicon, self.annotator.as_ref(), self.window)
    }

    /// Match a résumé against a job description.
    ///
    /// Deterministic for identical inputs given a deterministic annotator.
    #[tracing::instrument(skip_all, fields(job_len = job_text.len(), resume_len = resume_text.len()))]
    pub fn analyze(&self, job_text: &str, resume_text: &str) -> AnalysisResult<MatchReport> {
        let job_skills = self.extract_skills(job_text)?;
        let resume_skills = self.extract_skills(resume_text)?;
        let report = score::score_match(&job_skills, &resume_skills, job_text);
        tracing::info!(
            match_percentage = report.match_percentage,
            job_skills = report.job_skills.len(),
            resume_skills = report.resume_skills.len(),
            missing = report.missing_skills.len(),
            "analysis complete"
        );
        Ok(report)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{PartOfSpeech, Token};
    use crate::error::AnnotationError;

    const JOB: &str = "Looking for a python developer with sql and docker knowledge. \
                       Requires 2+ years of react experience.";
    const RESUME: &str = "Built services in python and react. Daily git user.";

    #[test]
    fn analyze_produces_overlap_and_gaps() {
        let engine = MatchEngine::default();
        let report = engine.analyze(JOB, RESUME).unwrap();
        assert!(report.job_skills.contains(&"python".to_string()));
        assert!(report.resume_skills.contains(&"react".to_string()));
        assert!(report.missing_skills.contains(&"sql".to_string()));
        assert!(report.missing_skills.contains(&"docker".to_string()));
        assert!(report.match_percentage > 0.0);
        assert!(report.match_percentage <= 100.0);
    }

    #[test]
    fn analyze_is_idempotent() {
        let engine = MatchEngine::default();
        let first = engine.analyze(JOB, RESUME).unwrap();
        let second = engine.analyze(JOB, RESUME).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_inputs_score_zero_without_error() {
        let engine = MatchEngine::default();
        let report = engine.analyze("", "").unwrap();
        assert_eq!(report.match_percentage, 0.0);
        assert!(report.job_skills.is_empty());
        assert!(report.resume_skills.is_empty());
        assert!(report.missing_skills.is_empty());
    }

    #[test]
    fn custom_lexicon_is_respected() {
        let lexicon = Lexicon::empty().with_skills(["cobol"]);
        let engine = MatchEngine::new(lexicon);
        let skills = engine.extract_skills("Maintains cobol systems").unwrap();
        assert_eq!(skills.to_vec(), vec!["cobol"]);
    }

    /// Annotator stub that always fails, for error propagation tests.
    struct FailingAnnotator;

    impl Annotator for FailingAnnotator {
        fn annotate(&self, _text: &str) -> Result<Vec<Token>, AnnotationError> {
            Err(AnnotationError::Backend("model unavailable".to_string()))
        }
    }

    /// Annotator stub returning a fixed token sequence.
    struct FixedAnnotator(Vec<Token>);

    impl Annotator for FixedAnnotator {
        fn annotate(&self, _text: &str) -> Result<Vec<Token>, AnnotationError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn annotation_failure_propagates() {
        let engine = MatchEngine::default().with_annotator(Box::new(FailingAnnotator));
        let err = engine.analyze("python", "python").unwrap_err();
        assert!(err.to_string().contains("model unavailable"));
    }

    #[test]
    fn hand_constructed_tokens_drive_contextual_extraction() {
        let tokens = vec![
            Token::new("splunk", PartOfSpeech::ProperNoun).with_subtree(vec![0, 1]),
            Token::new("engineer", PartOfSpeech::Noun).with_subtree(vec![0, 1]),
        ];
        let engine = MatchEngine::default().with_annotator(Box::new(FixedAnnotator(tokens)));
        let skills = engine.extract_skills("splunk engineer").unwrap();
        assert!(skills.contains("splunk"));
    }
}
