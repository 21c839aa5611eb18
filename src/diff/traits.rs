//! Trait definitions for structural comparison.
//!
//! This module defines the contract implemented by every comparable
//! model type, enabling recursive field-by-field diffing.

use super::DiffReport;

/// Capability of comparing a value against another of the same type.
///
/// Implementors (typically generated model types) produce a
/// [`DiffReport`] scoped to themselves, describing the fields they
/// differ on by name. Comparison is read-only and must not mutate
/// either operand.
///
/// Taking `&Self` makes cross-type comparison a compile error, so
/// implementations never need a "different type" policy.
///
/// # Example
///
/// ```
/// use modeldiff::{DiffReport, Diffable};
///
/// struct Parameter {
///     name: String,
///     default_value: Option<String>,
/// }
///
/// impl Diffable for Parameter {
///     fn diff_against(&self, expected: &Self) -> DiffReport {
///         let mut report = DiffReport::with_identifier("Parameter");
///         report
///             .track_difference(&self.name, &expected.name)
///             .track_difference(&self.default_value, &expected.default_value);
///         report
///     }
/// }
///
/// let a = Parameter { name: "limit".into(), default_value: None };
/// assert!(a.diff_against(&a).is_empty());
/// ```
pub trait Diffable {
    /// Compare `self` (the actual value) against `expected`, returning
    /// a report of every divergence found.
    fn diff_against(&self, expected: &Self) -> DiffReport;
}
