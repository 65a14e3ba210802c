//! Static plan catalog: price, billing-cycle pricing and feature flags per tier.
//!
//! Prices are in the smallest currency unit (rupiah). Formatting for display
//! belongs to the caller's locale layer.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::features::{FeatureFlag, FlagValue};
use super::plan_type::{PlanResolution, PlanType};

/// Billing cycle selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

/// One catalog entry. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDefinition {
    pub plan_type: PlanType,
    pub display_name: String,
    pub description: String,
    pub monthly_price: u64,
    pub yearly_price: u64,
    pub is_popular: bool,
    pub feature_flags: FxHashMap<FeatureFlag, FlagValue>,
}

impl PlanDefinition {
    pub fn price_for(&self, cycle: BillingCycle) -> u64 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    pub fn yearly_savings(&self) -> u64 {
        yearly_savings(self.monthly_price, self.yearly_price)
    }

    /// Value of `flag` on this plan. Built-in definitions carry every flag;
    /// a definition missing one treats it as disabled.
    pub fn flag(&self, flag: FeatureFlag) -> FlagValue {
        self.feature_flags.get(&flag).copied().unwrap_or(FlagValue::OFF)
    }
}

/// `max(0, monthly * 12 - yearly)`. Never negative, saturates instead of overflowing.
pub fn yearly_savings(monthly: u64, yearly: u64) -> u64 {
    monthly.saturating_mul(12).saturating_sub(yearly)
}

/// Registry of all plan definitions, indexed by tier rank.
#[derive(Debug, Clone)]
pub struct PlanCatalog {
    plans: [PlanDefinition; 3],
}

static BUILTIN: LazyLock<PlanCatalog> = LazyLock::new(PlanCatalog::builtin);

impl PlanCatalog {
    /// Shared built-in catalog, created on first use.
    pub fn global() -> &'static PlanCatalog {
        &BUILTIN
    }

    /// Build the catalog shipped with the clients.
    pub fn builtin() -> Self {
        Self {
            plans: [free_plan(), standard_plan(), pro_plan()],
        }
    }

    /// Total over `PlanType`.
    pub fn get(&self, plan_type: PlanType) -> &PlanDefinition {
        &self.plans[usize::from(plan_type.rank())]
    }

    /// Look up a plan by a stored identifier, applying the fallback rule
    /// for identifiers outside the enumerated set.
    pub fn get_stored(&self, raw: &str, fallback: PlanType) -> (&PlanDefinition, PlanResolution) {
        let resolution = PlanType::resolve_stored(raw, fallback);
        (self.get(resolution.plan_type), resolution)
    }

    /// All plans in ascending tier order.
    pub fn all(&self) -> impl Iterator<Item = &PlanDefinition> {
        self.plans.iter()
    }

    /// Plans with a non-zero monthly price, in ascending tier order.
    pub fn paid_plans(&self) -> impl Iterator<Item = &PlanDefinition> {
        self.plans.iter().filter(|p| p.monthly_price > 0)
    }

    pub fn popular(&self) -> Option<&PlanDefinition> {
        self.plans.iter().find(|p| p.is_popular)
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn flags(values: [(FeatureFlag, FlagValue); 12]) -> FxHashMap<FeatureFlag, FlagValue> {
    values.into_iter().collect()
}

fn free_plan() -> PlanDefinition {
    PlanDefinition {
        plan_type: PlanType::Free,
        display_name: PlanType::Free.display_name().to_string(),
        description: "Start selling with the essentials for a single outlet".to_string(),
        monthly_price: 0,
        yearly_price: 0,
        is_popular: false,
        feature_flags: flags([
            (FeatureFlag::MaxProducts, FlagValue::max(50)),
            (FeatureFlag::MaxEmployees, FlagValue::max(1)),
            (FeatureFlag::MaxTransactionsPerMonth, FlagValue::max(500)),
            (FeatureFlag::MaxOutlets, FlagValue::max(1)),
            (FeatureFlag::SalesReports, FlagValue::ON),
            (FeatureFlag::ExportReports, FlagValue::OFF),
            (FeatureFlag::InventoryTracking, FlagValue::ON),
            (FeatureFlag::CustomerManagement, FlagValue::OFF),
            (FeatureFlag::WhatsappReceipts, FlagValue::OFF),
            (FeatureFlag::AiProductScan, FlagValue::OFF),
            (FeatureFlag::CloudBackup, FlagValue::OFF),
            (FeatureFlag::PrioritySupport, FlagValue::OFF),
        ]),
    }
}

fn standard_plan() -> PlanDefinition {
    PlanDefinition {
        plan_type: PlanType::Standard,
        display_name: PlanType::Standard.display_name().to_string(),
        description: "For growing shops with a small team".to_string(),
        monthly_price: 49_000,
        yearly_price: 490_000,
        is_popular: true,
        feature_flags: flags([
            (FeatureFlag::MaxProducts, FlagValue::max(1_000)),
            (FeatureFlag::MaxEmployees, FlagValue::max(5)),
            (FeatureFlag::MaxTransactionsPerMonth, FlagValue::UNLIMITED),
            (FeatureFlag::MaxOutlets, FlagValue::max(1)),
            (FeatureFlag::SalesReports, FlagValue::ON),
            (FeatureFlag::ExportReports, FlagValue::ON),
            (FeatureFlag::InventoryTracking, FlagValue::ON),
            (FeatureFlag::CustomerManagement, FlagValue::ON),
            (FeatureFlag::WhatsappReceipts, FlagValue::ON),
            (FeatureFlag::AiProductScan, FlagValue::OFF),
            (FeatureFlag::CloudBackup, FlagValue::ON),
            (FeatureFlag::PrioritySupport, FlagValue::OFF),
        ]),
    }
}

fn pro_plan() -> PlanDefinition {
    PlanDefinition {
        plan_type: PlanType::Pro,
        display_name: PlanType::Pro.display_name().to_string(),
        description: "Unlimited products and staff across multiple outlets".to_string(),
        monthly_price: 99_000,
        yearly_price: 990_000,
        is_popular: false,
        feature_flags: flags([
            (FeatureFlag::MaxProducts, FlagValue::UNLIMITED),
            (FeatureFlag::MaxEmployees, FlagValue::UNLIMITED),
            (FeatureFlag::MaxTransactionsPerMonth, FlagValue::UNLIMITED),
            (FeatureFlag::MaxOutlets, FlagValue::max(10)),
            (FeatureFlag::SalesReports, FlagValue::ON),
            (FeatureFlag::ExportReports, FlagValue::ON),
            (FeatureFlag::InventoryTracking, FlagValue::ON),
            (FeatureFlag::CustomerManagement, FlagValue::ON),
            (FeatureFlag::WhatsappReceipts, FlagValue::ON),
            (FeatureFlag::AiProductScan, FlagValue::ON),
            (FeatureFlag::CloudBackup, FlagValue::ON),
            (FeatureFlag::PrioritySupport, FlagValue::ON),
        ]),
    }
}
