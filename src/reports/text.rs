//! Plain text report generator.

use super::{ReportFormat, ReportGenerator};
use crate::diff::DiffReport;
use crate::error::Result;

/// Text report generator.
///
/// Produces the report's plain rendering, the form consumers embed
/// verbatim in test-failure messages.
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, report: &DiffReport) -> Result<String> {
        Ok(report.render())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
