//! The decision functions hold no shared state; parallel callers must see
//! exactly what a sequential caller sees.

use betakasir_core::changelog::fallback::bundled;
use betakasir_core::changelog::merge;
use betakasir_core::config::NotificationSettings;
use betakasir_core::notification::{evaluate, UpdateNotificationConfig};
use betakasir_core::plans::{EntitlementGate, FeatureFlag, PlanType};
use betakasir_core::version::SemanticVersion;
use rayon::prelude::*;

#[test]
fn parallel_feature_checks_match_sequential() {
    let gate = EntitlementGate::default();
    let inputs: Vec<(PlanType, FeatureFlag)> = (0..1_000)
        .map(|i| (PlanType::ALL[i % 3], FeatureFlag::ALL[i % FeatureFlag::ALL.len()]))
        .collect();

    let sequential: Vec<_> = inputs.iter().map(|(p, f)| gate.check_feature(*p, *f)).collect();
    let parallel: Vec<_> = inputs.par_iter().map(|(p, f)| gate.check_feature(*p, *f)).collect();
    assert_eq!(sequential, parallel);
}

#[test]
fn parallel_evaluation_and_merge_are_stable() {
    let config = UpdateNotificationConfig::new(
        "1.2.2",
        "{current} is current",
        "{latest} available",
        "",
        &NotificationSettings::default(),
    )
    .unwrap();
    let fallback = bundled();
    let expected_merge = merge(&fallback[..1], &fallback);

    (0..500u32).into_par_iter().for_each(|patch| {
        let current = SemanticVersion::new(1, 2, patch % 5);
        let decision = evaluate(&current, &config).unwrap();
        assert_eq!(decision.has_update, current.patch < 2);
        assert_eq!(merge(&fallback[..1], &fallback), expected_merge);
    });
}
