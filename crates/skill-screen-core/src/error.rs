//! Error types for skill-screen-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors produced by a linguistic-annotation backend.
#[derive(Error, Debug)]
pub enum AnnotationError {
    /// The backend could not annotate the input.
    #[error("annotation backend failed: {0}")]
    Backend(String),
}

/// Errors that can occur during skill extraction and matching.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The linguistic-annotation step failed.
    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotationError),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
