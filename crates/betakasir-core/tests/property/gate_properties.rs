//! Property-based tests for the gate's universal guarantees.
//!
//! 1. Parse round-trip: "a.b.c" parses to exactly (a, b, c)
//! 2. Version comparison is a strict total order
//! 3. Merge never yields two entries with the same version key
//! 4. Merge keeps every fetched entry first, in order
//! 5. Yearly savings are never negative and never exceed monthly * 12

use std::cmp::Ordering;

use proptest::prelude::*;

use betakasir_core::changelog::{merge, merge_with, ChangelogEntry, ReleaseType, VersionKey};
use betakasir_core::plans::yearly_savings;
use betakasir_core::version::{SemanticVersion, VersionComparator};
use chrono::NaiveDate;
use rustc_hash::FxHashSet;

// =============================================================================
// Strategy helpers
// =============================================================================

fn version_strategy() -> impl Strategy<Value = SemanticVersion> {
    (0u32..20, 0u32..20, 0u32..20).prop_map(|(a, b, c)| SemanticVersion::new(a, b, c))
}

/// Version identifiers as they might be stored, including zero-padded forms.
fn stored_version_strategy() -> impl Strategy<Value = String> {
    (0u32..4, 0u32..4, 0u32..4, any::<bool>()).prop_map(|(a, b, c, padded)| {
        if padded {
            format!("{a}.0{b}.{c}")
        } else {
            format!("{a}.{b}.{c}")
        }
    })
}

fn entries_strategy(prefix: &'static str, max: usize) -> impl Strategy<Value = Vec<ChangelogEntry>> {
    prop::collection::vec(stored_version_strategy(), 0..=max).prop_map(move |versions| {
        versions
            .into_iter()
            .enumerate()
            .map(|(i, version)| ChangelogEntry {
                id: format!("{prefix}-{i}"),
                version,
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                title: String::new(),
                description: String::new(),
                release_type: ReleaseType::Patch,
                changes: vec![],
            })
            .collect()
    })
}

// =============================================================================
// PROP-01: Parse round-trip
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_01_parse_roundtrip(a in any::<u32>(), b in any::<u32>(), c in any::<u32>()) {
        let parsed = SemanticVersion::parse(&format!("{a}.{b}.{c}")).unwrap();
        prop_assert_eq!(parsed.major, a);
        prop_assert_eq!(parsed.minor, b);
        prop_assert_eq!(parsed.patch, c);
    }
}

// =============================================================================
// PROP-02: Strict total order
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_02_compare_antisymmetric(x in version_strategy(), y in version_strategy()) {
        let xy = VersionComparator::compare(&x, &y);
        let yx = VersionComparator::compare(&y, &x);
        prop_assert_eq!(xy, yx.reverse());
        prop_assert_eq!(xy == Ordering::Equal, x == y);
        prop_assert!(!(VersionComparator::is_newer(&x, &y) && VersionComparator::is_newer(&y, &x)));
    }

    #[test]
    fn prop_02_compare_transitive(
        x in version_strategy(),
        y in version_strategy(),
        z in version_strategy(),
    ) {
        if VersionComparator::compare(&x, &y) != Ordering::Greater
            && VersionComparator::compare(&y, &z) != Ordering::Greater
        {
            prop_assert_ne!(VersionComparator::compare(&x, &z), Ordering::Greater);
        }
    }
}

// =============================================================================
// PROP-03 / PROP-04: Merge
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_03_merge_has_unique_versions(
        fetched in entries_strategy("f", 8),
        fallback in entries_strategy("s", 8),
    ) {
        for key in [VersionKey::Exact, VersionKey::Canonical] {
            let merged = merge_with(&fetched, &fallback, key);
            let mut seen = FxHashSet::default();
            for entry in &merged {
                prop_assert!(seen.insert(key.key(&entry.version)), "duplicate {}", entry.version);
            }
        }
    }

    #[test]
    fn prop_04_fetched_entries_lead(
        fetched in entries_strategy("f", 8),
        fallback in entries_strategy("s", 8),
    ) {
        let merged = merge(&fetched, &fallback);
        let mut seen = FxHashSet::default();
        let unique_fetched: Vec<&ChangelogEntry> =
            fetched.iter().filter(|e| seen.insert(e.version.clone())).collect();

        prop_assert!(merged.len() >= unique_fetched.len());
        for (m, f) in merged.iter().zip(unique_fetched.iter()) {
            prop_assert_eq!(&m.id, &f.id);
        }
        prop_assert!(merged[unique_fetched.len()..].iter().all(|e| e.id.starts_with("s-")));
        prop_assert_eq!(merge(&fetched, &fallback), merged);
    }
}

// =============================================================================
// PROP-05: Savings
// =============================================================================
proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_05_savings_bounded(monthly in any::<u64>(), yearly in any::<u64>()) {
        let savings = yearly_savings(monthly, yearly);
        prop_assert!(savings <= monthly.saturating_mul(12));
        if yearly >= monthly.saturating_mul(12) {
            prop_assert_eq!(savings, 0);
        }
    }
}
