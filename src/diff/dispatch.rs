//! Comparison dispatch strategies.
//!
//! Each `track_*` method implements one comparison strategy, selected at
//! the call site by the static shape of the field under comparison:
//! scalar (optional or not), nested comparable, ordered sequence (plain
//! or comparable elements), keyed mapping (comparable or merely
//! equatable values). All strategies mutate the report in place and
//! return it for chaining, and none of them can fail: missing keys and
//! count mismatches are recorded as divergence entries, not errors.

use super::{DiffReport, Diffable};
use indexmap::IndexMap;
use std::fmt;
use std::hash::Hash;

impl DiffReport {
    /// Compare two directly-equatable values.
    ///
    /// Covers scalars and optionals alike, since `Option<T>` carries the
    /// same bounds. On mismatch, appends a single entry holding both
    /// values. The entry labels the actual value as "expected" and the
    /// expected value as "received"; consumers parse this exact text, so
    /// the historical labeling is kept as is.
    pub fn track_difference<T>(&mut self, actual: &T, expected: &T) -> &mut Self
    where
        T: PartialEq + fmt::Debug,
    {
        if actual != expected {
            self.append(format!("<expected: {actual:?}, received: {expected:?}>"));
        }
        self
    }

    /// Recursively compare two values implementing [`Diffable`].
    ///
    /// Delegates to [`Diffable::diff_against`] and folds the result in;
    /// an empty sub-report is filtered out by the fold.
    pub fn track_diffable<T>(&mut self, actual: &T, expected: &T) -> &mut Self
    where
        T: Diffable,
    {
        self.append_report(actual.diff_against(expected));
        self
    }

    /// Compare two ordered sequences of directly-equatable elements.
    ///
    /// A length mismatch is reported as a single `Different count` entry
    /// and suppresses per-index comparison. With equal lengths, every
    /// index is checked (no short-circuit after the first mismatch) and
    /// each mismatch is tagged with its index.
    pub fn track_sequence<T>(&mut self, actual: &[T], expected: &[T]) -> &mut Self
    where
        T: PartialEq + fmt::Debug,
    {
        if actual.len() != expected.len() {
            self.append(format!(
                "Different count {} vs {}",
                actual.len(),
                expected.len()
            ));
            return self;
        }
        for (idx, (a, e)) in actual.iter().zip(expected).enumerate() {
            if a != e {
                self.append(format!("idx {idx}: <expected: {a:?}, received: {e:?}>"));
            }
        }
        self
    }

    /// Compare two ordered sequences of [`Diffable`] elements.
    ///
    /// Same length fast path as [`track_sequence`](Self::track_sequence).
    /// With equal lengths, each index is diffed into a fresh sub-report;
    /// non-empty sub-reports are appended tagged with their index.
    pub fn track_diffable_sequence<T>(&mut self, actual: &[T], expected: &[T]) -> &mut Self
    where
        T: Diffable,
    {
        if actual.len() != expected.len() {
            self.append(format!(
                "Different count {} vs {}",
                actual.len(),
                expected.len()
            ));
            return self;
        }
        for (idx, (a, e)) in actual.iter().zip(expected).enumerate() {
            let nested = a.diff_against(e);
            if !nested.is_empty() {
                self.append(format!("idx {idx}: {nested}"));
            }
        }
        self
    }

    /// Compare two keyed mappings of [`Diffable`] values.
    ///
    /// Insertion-ordered maps keep the `Missing keys` listing and the
    /// per-key scan deterministic.
    ///
    /// When key counts differ, a `Different count` entry is appended,
    /// plus a `Missing keys` entry listing every key of `expected`
    /// absent from `actual` (in `expected`'s iteration order) when
    /// `expected` is the larger side; the per-key scan is then skipped
    /// entirely. With equal counts, every key of `actual` is scanned:
    /// keys missing from `expected` get a `Missing key` entry, and
    /// divergent values are diffed recursively, tagged by key.
    pub fn track_diffable_map<K, V>(
        &mut self,
        actual: &IndexMap<K, V>,
        expected: &IndexMap<K, V>,
    ) -> &mut Self
    where
        K: Hash + Eq + fmt::Display,
        V: Diffable,
    {
        if self.track_map_counts(actual.len(), expected.len(), || missing_keys(actual, expected)) {
            return self;
        }
        for (key, value) in actual {
            match expected.get(key) {
                None => self.append(format!("Missing key \"{key}\"")),
                Some(other) => {
                    let nested = value.diff_against(other);
                    if !nested.is_empty() {
                        self.append(format!("key \"{key}\": {nested}"));
                    }
                }
            }
        }
        self
    }

    /// Compare two keyed mappings of merely equatable values.
    ///
    /// Fallback for value types that support equality but not structural
    /// introspection. Control flow is identical to
    /// [`track_diffable_map`](Self::track_diffable_map); the per-key
    /// test is plain equality and mismatches are reported inline.
    pub fn track_equatable_map<K, V>(
        &mut self,
        actual: &IndexMap<K, V>,
        expected: &IndexMap<K, V>,
    ) -> &mut Self
    where
        K: Hash + Eq + fmt::Display,
        V: PartialEq + fmt::Debug,
    {
        if self.track_map_counts(actual.len(), expected.len(), || missing_keys(actual, expected)) {
            return self;
        }
        for (key, value) in actual {
            match expected.get(key) {
                None => self.append(format!("Missing key \"{key}\"")),
                Some(other) => {
                    if value != other {
                        self.append(format!(
                            "key \"{key}\": <expected: {value:?}, received: {other:?}>"
                        ));
                    }
                }
            }
        }
        self
    }

    /// Shared count fast path for the map strategies.
    ///
    /// Returns true when counts differ, in which case the count entry
    /// (and, when `expected` is larger, the missing-keys entry) has been
    /// appended and the caller must skip the per-key scan.
    fn track_map_counts(
        &mut self,
        actual_len: usize,
        expected_len: usize,
        missing: impl FnOnce() -> Vec<String>,
    ) -> bool {
        if actual_len == expected_len {
            return false;
        }
        self.append(format!("Different count {actual_len} vs {expected_len}"));
        if expected_len > actual_len {
            self.append(format!("Missing keys: {}", missing().join(", ")));
        }
        true
    }
}

/// Keys of `expected` that are absent from `actual`, in `expected`'s
/// iteration order.
fn missing_keys<K, V>(actual: &IndexMap<K, V>, expected: &IndexMap<K, V>) -> Vec<String>
where
    K: Hash + Eq + fmt::Display,
{
    expected
        .keys()
        .filter(|key| !actual.contains_key(*key))
        .map(ToString::to_string)
        .collect()
}

/// One-shot comparison of two comparable values.
///
/// Convenience entry point for test harnesses; equivalent to
/// `actual.diff_against(expected)` with a debug event when divergence
/// was found.
pub fn diff<T: Diffable>(actual: &T, expected: &T) -> DiffReport {
    let report = actual.diff_against(expected);
    if !report.is_empty() {
        tracing::debug!(entries = report.len(), "structural divergence detected");
    }
    report
}
