//! Structural diff engine for generated model types.
//!
//! This module implements a recursive, field-by-field comparison engine
//! whose output is a human-readable divergence report rather than a
//! bare boolean.
//!
//! # Architecture
//!
//! The engine is built from three small pieces:
//!
//! - [`Diffable`]: the contract a comparable model type implements
//! - [`DiffReport`]: the accumulator of divergence entries, with an
//!   optional identifying label
//! - The `track_*` dispatch family on [`DiffReport`]: one comparison
//!   strategy per value shape, selected statically at the call site
//!
//! A caller builds a root report, chains one `track_*` call per field,
//! and renders the result. Recursive strategies diff into fresh
//! sub-reports, tag them with a path segment (field name, `idx i`,
//! `key "k"`), and fold them into the parent only when non-empty.
//!
//! # Example
//!
//! ```
//! use modeldiff::{DiffReport, Diffable};
//!
//! struct Record {
//!     name: String,
//!     values: Vec<i64>,
//! }
//!
//! impl Diffable for Record {
//!     fn diff_against(&self, expected: &Self) -> DiffReport {
//!         let mut report = DiffReport::with_identifier("Record");
//!         report
//!             .track_difference(&self.name, &expected.name)
//!             .track_sequence(&self.values, &expected.values);
//!         report
//!     }
//! }
//!
//! let actual = Record { name: "a".into(), values: vec![1, 2] };
//! let expected = Record { name: "a".into(), values: vec![1, 3] };
//!
//! let report = actual.diff_against(&expected);
//! assert_eq!(report.render(), "Record idx 1: <expected: 2, received: 3>");
//! ```

mod dispatch;
mod report;
mod traits;

pub use dispatch::diff;
pub use report::DiffReport;
pub use traits::Diffable;
