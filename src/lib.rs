//! **Structural diffing and divergence reporting for generated model types.**
//!
//! `modeldiff` compares two values that are expected to be semantically
//! equal, typically "before" and "after" instances of generated model
//! objects, and produces a human-readable report describing every point
//! of divergence. Instead of "assertion failed", a test reports exactly
//! which field, sequence index, or map key diverged and what the two
//! values were.
//!
//! ## Core Concepts
//!
//! - **[`Diffable`]**: the contract a comparable type implements. Asked
//!   to compare itself against another value of the same type, it
//!   returns a report scoped to itself, naming the fields it differs on.
//! - **[`DiffReport`]**: the accumulator of divergence entries plus an
//!   optional identifying label. It supports appending entries, folding
//!   in nested reports (empty ones are dropped), querying emptiness, and
//!   rendering to text.
//! - **Comparison dispatch**: a family of `track_*` methods on
//!   [`DiffReport`], one per value shape: direct equality for scalars
//!   and optionals, recursive comparison for nested comparables,
//!   element-wise comparison for ordered sequences, and per-key
//!   comparison for keyed mappings, with an equality-only fallback for
//!   map values that offer no structural introspection. The strategy is
//!   selected statically at each call site by the field's type.
//!
//! All "failure to match" conditions are represented uniformly as
//! report entries, never as errors: the engine's job is reporting
//! discrepancy, not failing fast.
//!
//! ## Getting Started
//!
//! Implement [`Diffable`] for a type by chaining one `track_*` call per
//! field:
//!
//! ```
//! use modeldiff::{DiffReport, Diffable};
//!
//! struct Method {
//!     name: String,
//!     is_async: bool,
//!     parameters: Vec<String>,
//! }
//!
//! impl Diffable for Method {
//!     fn diff_against(&self, expected: &Self) -> DiffReport {
//!         let mut report = DiffReport::with_identifier("Method");
//!         report
//!             .track_difference(&self.name, &expected.name)
//!             .track_difference(&self.is_async, &expected.is_async)
//!             .track_sequence(&self.parameters, &expected.parameters);
//!         report
//!     }
//! }
//!
//! let actual = Method {
//!     name: "run".into(),
//!     is_async: false,
//!     parameters: vec!["limit".into()],
//! };
//! let expected = Method {
//!     name: "run".into(),
//!     is_async: true,
//!     parameters: vec!["limit".into()],
//! };
//!
//! let report = actual.diff_against(&expected);
//! assert!(!report.is_empty());
//! assert_eq!(report.render(), "Method <expected: false, received: true>");
//! ```
//!
//! A non-empty rendering means "test should fail"; consumers embed the
//! text verbatim in the failure message. Nested [`Diffable`] fields fold
//! their reports into the parent with a breadcrumb of path segments
//! (`idx 3`, `key "name"`, type identifiers) marking where the
//! divergence was found.
//!
//! ## Report Output
//!
//! The [`reports`] module renders a finished report as plain text or
//! JSON:
//!
//! ```
//! use modeldiff::{generate_report, DiffReport, ReportFormat};
//!
//! let mut report = DiffReport::with_identifier("Method");
//! report.track_difference(&1, &2);
//!
//! let text = generate_report(&report, ReportFormat::Text)?;
//! assert_eq!(text, "Method <expected: 1, received: 2>");
//! # Ok::<(), modeldiff::ModelDiffError>(())
//! ```

// Discourage unwrap() outside tests; the engine is total and the one
// fallible surface returns typed errors.
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod diff;
pub mod error;
pub mod reports;

// Re-export main types for convenience
pub use diff::{diff, DiffReport, Diffable};
pub use error::{ModelDiffError, ReportErrorKind, Result};
pub use reports::{generate_report, JsonReporter, ReportFormat, ReportGenerator, TextReporter};
