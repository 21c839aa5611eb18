//! JSON report generator.

use super::{ReportFormat, ReportGenerator};
use crate::diff::DiffReport;
use crate::error::{ModelDiffError, ReportErrorKind, Result};

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter with pretty printing enabled
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &DiffReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.map_err(|e| ModelDiffError::Report {
            context: "serializing divergence report".to_string(),
            source: ReportErrorKind::JsonSerializationError(e.to_string()),
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_reporter_compact() {
        let mut report = DiffReport::with_identifier("Foo");
        report.append("a");

        let out = JsonReporter::new()
            .pretty(false)
            .generate(&report)
            .expect("json generation");
        assert_eq!(out, r#"{"entries":["a"],"identifier":"Foo"}"#);
    }

    #[test]
    fn test_json_reporter_roundtrip() {
        let mut report = DiffReport::new();
        report.append("a");
        report.append("b");

        let out = JsonReporter::new().generate(&report).expect("json generation");
        let back: DiffReport = serde_json::from_str(&out).expect("json parse");
        assert_eq!(back, report);
    }

    #[test]
    fn test_format() {
        assert_eq!(JsonReporter::new().format(), ReportFormat::Json);
    }
}
