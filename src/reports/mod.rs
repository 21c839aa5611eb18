//! Report generation for divergence reports.
//!
//! This module renders a [`DiffReport`] for embedding in test-failure
//! output:
//! - Text: the report's plain rendering, suitable for assertion messages
//! - JSON: structured data for programmatic integration
//!
//! No file I/O happens here; generators produce strings and the host
//! decides where they go.

mod json;
mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

use crate::diff::DiffReport;
use crate::error::Result;

/// Output format for a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text rendering
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a divergence report
    fn generate(&self, report: &DiffReport) -> Result<String>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Generate a report in the requested format.
pub fn generate_report(report: &DiffReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => TextReporter::new().generate(report),
        ReportFormat::Json => JsonReporter::new().generate(report),
    }
}
