//! EntitlementGate: plan change classification and feature checks.
//! Pure decision functions; no pending or processing states are modeled here.

use serde::{Deserialize, Serialize};

use crate::errors::EntitlementError;

use super::catalog::PlanCatalog;
use super::features::{FeatureFlag, FlagValue};
use super::plan_type::PlanType;

/// Direction of a requested plan change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanChange {
    Upgrade,
    Downgrade,
    Same,
}

/// Channel a plan change has to go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutRoute {
    /// In-app checkout.
    SelfServe,
    /// Manual handling through the assisted (WhatsApp) channel.
    Assisted,
    /// Target equals the current plan; nothing to do.
    NoChange,
}

/// Gate over a plan catalog.
#[derive(Debug, Clone, Copy)]
pub struct EntitlementGate<'a> {
    catalog: &'a PlanCatalog,
}

impl Default for EntitlementGate<'static> {
    fn default() -> Self {
        Self::new(PlanCatalog::global())
    }
}

impl<'a> EntitlementGate<'a> {
    pub fn new(catalog: &'a PlanCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a PlanCatalog {
        self.catalog
    }

    pub fn rank(plan_type: PlanType) -> u8 {
        plan_type.rank()
    }

    /// `Same` iff equal, otherwise `Upgrade` iff the target ranks higher.
    pub fn classify_change(current: PlanType, target: PlanType) -> PlanChange {
        if current == target {
            PlanChange::Same
        } else if target.rank() > current.rank() {
            PlanChange::Upgrade
        } else {
            PlanChange::Downgrade
        }
    }

    /// Upgrades to a paid tier and downgrades to free are self-serve.
    /// Staying on the same plan and downgrading between paid tiers are not.
    pub fn can_self_serve_change_to(current: PlanType, target: PlanType) -> bool {
        match Self::classify_change(current, target) {
            PlanChange::Upgrade => target.is_paid(),
            PlanChange::Downgrade => target == PlanType::Free,
            PlanChange::Same => false,
        }
    }

    pub fn checkout_route(current: PlanType, target: PlanType) -> CheckoutRoute {
        if current == target {
            CheckoutRoute::NoChange
        } else if Self::can_self_serve_change_to(current, target) {
            CheckoutRoute::SelfServe
        } else {
            CheckoutRoute::Assisted
        }
    }

    /// Look up a flag by name on a plan.
    ///
    /// Names outside the recognized set fail with `UnknownFeatureFlag`; a typo
    /// never reads as "disabled".
    pub fn is_feature_enabled(
        &self,
        plan_type: PlanType,
        flag_name: &str,
    ) -> Result<FlagValue, EntitlementError> {
        let flag = FeatureFlag::parse(flag_name).ok_or_else(|| {
            EntitlementError::UnknownFeatureFlag {
                flag: flag_name.to_string(),
            }
        })?;
        Ok(self.check_feature(plan_type, flag))
    }

    pub fn check_feature(&self, plan_type: PlanType, flag: FeatureFlag) -> FlagValue {
        self.catalog.get(plan_type).flag(flag)
    }

    /// Whether one more item may be added under `flag` given `current_usage`.
    pub fn allows_usage(
        &self,
        plan_type: PlanType,
        flag_name: &str,
        current_usage: u32,
    ) -> Result<bool, EntitlementError> {
        Ok(self
            .is_feature_enabled(plan_type, flag_name)?
            .allows(current_usage))
    }

    /// Lowest tier on which `flag` is enabled (a non-zero limit counts).
    pub fn min_plan_for(&self, flag: FeatureFlag) -> Option<PlanType> {
        PlanType::ALL
            .into_iter()
            .find(|plan_type| self.check_feature(*plan_type, flag).is_enabled())
    }

    /// Flags enabled on a plan, in `FeatureFlag::ALL` order.
    pub fn features_for_plan(&self, plan_type: PlanType) -> Vec<FeatureFlag> {
        FeatureFlag::ALL
            .into_iter()
            .filter(|flag| self.check_feature(plan_type, *flag).is_enabled())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_plan_is_same() {
        for p in PlanType::ALL {
            assert_eq!(EntitlementGate::classify_change(p, p), PlanChange::Same);
            assert!(!EntitlementGate::can_self_serve_change_to(p, p));
            assert_eq!(EntitlementGate::checkout_route(p, p), CheckoutRoute::NoChange);
        }
    }

    #[test]
    fn downgrade_between_paid_tiers_is_assisted() {
        assert_eq!(
            EntitlementGate::checkout_route(PlanType::Pro, PlanType::Standard),
            CheckoutRoute::Assisted
        );
    }

    #[test]
    fn downgrade_to_free_is_self_serve() {
        assert_eq!(
            EntitlementGate::checkout_route(PlanType::Pro, PlanType::Free),
            CheckoutRoute::SelfServe
        );
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let gate = EntitlementGate::default();
        assert_eq!(
            gate.is_feature_enabled(PlanType::Pro, "max_prodcts"),
            Err(EntitlementError::UnknownFeatureFlag {
                flag: "max_prodcts".to_string()
            })
        );
    }

    #[test]
    fn min_plan_for_features() {
        let gate = EntitlementGate::default();
        assert_eq!(gate.min_plan_for(FeatureFlag::SalesReports), Some(PlanType::Free));
        assert_eq!(gate.min_plan_for(FeatureFlag::ExportReports), Some(PlanType::Standard));
        assert_eq!(gate.min_plan_for(FeatureFlag::AiProductScan), Some(PlanType::Pro));
    }
}
