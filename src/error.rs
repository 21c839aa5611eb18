//! Unified error types for modeldiff.
//!
//! The comparison engine itself is total: failure to match is reported
//! as divergence entries, never as errors. The only fallible surface is
//! report generation, which can fail on serialization.

use thiserror::Error;

/// Main error type for modeldiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ModelDiffError {
    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

/// Convenience result alias for modeldiff operations.
pub type Result<T> = std::result::Result<T, ModelDiffError>;
