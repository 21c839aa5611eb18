//! Divergence report accumulator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Accumulator of human-readable divergence entries.
///
/// A report is created fresh per comparison scope: one at the root, and
/// one per recursive descent into a field, sequence element, or map
/// entry. Nested reports are folded into their parent with
/// [`append_report`](Self::append_report), which drops empty reports so
/// the rendered output never contains empty-path noise.
///
/// Entry order is discovery order and is significant for reproducible
/// output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DiffReport {
    /// Divergence entries, in discovery order
    entries: Vec<String>,
    /// Optional identifying label, prepended when rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
}

impl DiffReport {
    /// Create a new empty report with no identifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty report labeled with an identifier.
    ///
    /// The identifier (typically a type name or a path segment) is
    /// prepended to the rendered text, but only when the report has at
    /// least one entry.
    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            identifier: Some(identifier.into()),
        }
    }

    /// Add one divergence line. Total, always succeeds.
    pub fn append(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Fold a nested report into this one.
    ///
    /// A non-empty `nested` is appended as a single entry holding its
    /// full rendered text; an empty `nested` is a no-op.
    pub fn append_report(&mut self, nested: DiffReport) {
        if !nested.is_empty() {
            self.entries.push(nested.render());
        }
    }

    /// Check if the report recorded any divergence
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of divergence entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Divergence entries, in discovery order
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The identifying label, if one was set
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Render the report to text.
    ///
    /// Empty reports render to the empty string regardless of
    /// identifier. Otherwise the identifier (if present) is followed by
    /// a space and the newline-joined entries. Pure read; rendering
    /// twice yields identical text.
    #[must_use]
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        match &self.identifier {
            Some(identifier) => format!("{} {}", identifier, self.entries.join("\n")),
            None => self.entries.join("\n"),
        }
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
