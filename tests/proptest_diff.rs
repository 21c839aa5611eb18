//! Property-based tests for the comparison engine.
//!
//! Ensures the dispatch strategies hold their invariants across random
//! inputs: equal values never produce entries, count mismatches produce
//! exactly one, and rendering is a pure read.

use indexmap::IndexMap;
use modeldiff::{DiffReport, Diffable};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    value: i64,
}

impl Diffable for Entry {
    fn diff_against(&self, expected: &Self) -> DiffReport {
        let mut report = DiffReport::new();
        report.track_difference(&self.value, &expected.value);
        report
    }
}

fn arb_map() -> impl Strategy<Value = IndexMap<String, i64>> {
    proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..8)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    // 1000 cases: the engine is allocation-light and the invariants
    // benefit from broad input coverage.
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn equal_scalars_produce_empty_report(v in any::<i64>()) {
        let mut report = DiffReport::new();
        report.track_difference(&v, &v);
        prop_assert!(report.is_empty());
    }

    #[test]
    fn unequal_scalars_produce_one_entry_with_both_values(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let mut report = DiffReport::new();
        report.track_difference(&a, &b);
        prop_assert_eq!(report.len(), 1);
        let rendered = report.render();
        prop_assert!(rendered.contains(&a.to_string()));
        prop_assert!(rendered.contains(&b.to_string()));
    }

    #[test]
    fn equal_sequences_produce_empty_report(xs in proptest::collection::vec(any::<i64>(), 0..32)) {
        let mut report = DiffReport::new();
        report.track_sequence(&xs, &xs);
        prop_assert!(report.is_empty());
    }

    #[test]
    fn length_mismatch_is_a_single_entry(
        xs in proptest::collection::vec(any::<i64>(), 0..16),
        ys in proptest::collection::vec(any::<i64>(), 0..16),
    ) {
        prop_assume!(xs.len() != ys.len());
        let mut report = DiffReport::new();
        report.track_sequence(&xs, &ys);
        prop_assert_eq!(report.len(), 1);
        prop_assert_eq!(
            report.render(),
            format!("Different count {} vs {}", xs.len(), ys.len())
        );
    }

    #[test]
    fn entry_count_matches_divergent_indices(
        pairs in proptest::collection::vec((any::<i64>(), any::<i64>()), 0..32),
    ) {
        let xs: Vec<i64> = pairs.iter().map(|(a, _)| *a).collect();
        let ys: Vec<i64> = pairs.iter().map(|(_, b)| *b).collect();
        let divergent = pairs.iter().filter(|(a, b)| a != b).count();

        let mut report = DiffReport::new();
        report.track_sequence(&xs, &ys);
        prop_assert_eq!(report.len(), divergent);
    }

    #[test]
    fn equal_maps_produce_empty_report(m in arb_map()) {
        let entries: IndexMap<String, Entry> = m
            .iter()
            .map(|(k, v)| (k.clone(), Entry { value: *v }))
            .collect();

        let mut report = DiffReport::new();
        report.track_equatable_map(&m, &m);
        report.track_diffable_map(&entries, &entries);
        prop_assert!(report.is_empty());
    }

    #[test]
    fn subset_map_lists_every_missing_key(m in arb_map()) {
        prop_assume!(!m.is_empty());
        let actual = IndexMap::new();

        let mut report = DiffReport::new();
        report.track_equatable_map(&actual, &m);
        prop_assert_eq!(report.len(), 2);

        let rendered = report.render();
        for key in m.keys() {
            prop_assert!(rendered.contains(key.as_str()));
        }
    }

    #[test]
    fn rendering_is_idempotent(
        entries in proptest::collection::vec("\\PC{1,40}", 0..8),
        identifier in proptest::option::of("[A-Za-z]{1,12}"),
    ) {
        let mut report = match identifier {
            Some(id) => DiffReport::with_identifier(id),
            None => DiffReport::new(),
        };
        for entry in &entries {
            report.append(entry.clone());
        }

        let first = report.render();
        let second = report.render();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(report.is_empty(), entries.is_empty());
        prop_assert_eq!(report.render().is_empty(), entries.is_empty());
    }

    #[test]
    fn folding_empty_reports_never_changes_the_parent(
        entries in proptest::collection::vec("\\PC{0,40}", 0..8),
    ) {
        let mut parent = DiffReport::new();
        for entry in &entries {
            parent.append(entry.clone());
        }
        let before = parent.clone();

        parent.append_report(DiffReport::new());
        parent.append_report(DiffReport::with_identifier("Nested"));
        prop_assert_eq!(parent, before);
    }
}
