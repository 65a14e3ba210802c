//! 12 feature flags attached to every plan.
//!
//! Limits: products, employees, monthly transactions, outlets
//! Toggles: sales reports, report export, inventory, customers,
//! WhatsApp receipts, AI product scan, cloud backup, priority support

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// All recognized feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureFlag {
    // ── Limits (4) ─────────────────────────────────────────────
    MaxProducts,
    MaxEmployees,
    MaxTransactionsPerMonth,
    MaxOutlets,

    // ── Toggles (8) ────────────────────────────────────────────
    SalesReports,
    ExportReports,
    InventoryTracking,
    CustomerManagement,
    WhatsappReceipts,
    AiProductScan,
    CloudBackup,
    PrioritySupport,
}

impl FeatureFlag {
    /// All 12 flags.
    pub const ALL: [FeatureFlag; 12] = [
        Self::MaxProducts,
        Self::MaxEmployees,
        Self::MaxTransactionsPerMonth,
        Self::MaxOutlets,
        Self::SalesReports,
        Self::ExportReports,
        Self::InventoryTracking,
        Self::CustomerManagement,
        Self::WhatsappReceipts,
        Self::AiProductScan,
        Self::CloudBackup,
        Self::PrioritySupport,
    ];

    /// Whether the flag carries a numeric limit rather than a toggle.
    pub fn is_limit(&self) -> bool {
        matches!(
            self,
            Self::MaxProducts
                | Self::MaxEmployees
                | Self::MaxTransactionsPerMonth
                | Self::MaxOutlets
        )
    }

    /// Flag name as stored in plan documents and used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxProducts => "max_products",
            Self::MaxEmployees => "max_employees",
            Self::MaxTransactionsPerMonth => "max_transactions_per_month",
            Self::MaxOutlets => "max_outlets",
            Self::SalesReports => "sales_reports",
            Self::ExportReports => "export_reports",
            Self::InventoryTracking => "inventory_tracking",
            Self::CustomerManagement => "customer_management",
            Self::WhatsappReceipts => "whatsapp_receipts",
            Self::AiProductScan => "ai_product_scan",
            Self::CloudBackup => "cloud_backup",
            Self::PrioritySupport => "priority_support",
        }
    }

    /// Parse a flag name. Accepts the snake_case form and the camelCase
    /// form used by client documents; anything else is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "max_products" | "maxProducts" => Some(Self::MaxProducts),
            "max_employees" | "maxEmployees" => Some(Self::MaxEmployees),
            "max_transactions_per_month" | "maxTransactionsPerMonth" => {
                Some(Self::MaxTransactionsPerMonth)
            }
            "max_outlets" | "maxOutlets" => Some(Self::MaxOutlets),
            "sales_reports" | "salesReports" => Some(Self::SalesReports),
            "export_reports" | "exportReports" => Some(Self::ExportReports),
            "inventory_tracking" | "inventoryTracking" => Some(Self::InventoryTracking),
            "customer_management" | "customerManagement" => Some(Self::CustomerManagement),
            "whatsapp_receipts" | "whatsappReceipts" => Some(Self::WhatsappReceipts),
            "ai_product_scan" | "aiProductScan" => Some(Self::AiProductScan),
            "cloud_backup" | "cloudBackup" => Some(Self::CloudBackup),
            "priority_support" | "prioritySupport" => Some(Self::PrioritySupport),
            _ => None,
        }
    }

    /// Human-readable description for plan comparison and upgrade prompts.
    pub fn description(&self) -> &'static str {
        match self {
            Self::MaxProducts => "Products in the catalog",
            Self::MaxEmployees => "Employee (cashier) accounts",
            Self::MaxTransactionsPerMonth => "Transactions per month",
            Self::MaxOutlets => "Outlets managed from one account",
            Self::SalesReports => "Daily and monthly sales reports",
            Self::ExportReports => "Export reports to spreadsheet",
            Self::InventoryTracking => "Stock and inventory tracking",
            Self::CustomerManagement => "Customer records and purchase history",
            Self::WhatsappReceipts => "Send receipts over WhatsApp",
            Self::AiProductScan => "Add products by scanning a photo",
            Self::CloudBackup => "Automatic cloud backup",
            Self::PrioritySupport => "Priority support",
        }
    }
}

/// Numeric cap attached to a limit flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLimit {
    /// Stored as `-1`.
    Unlimited,
    Max(u32),
}

impl UsageLimit {
    pub const UNLIMITED_SENTINEL: i64 = -1;

    pub fn to_stored(self) -> i64 {
        match self {
            Self::Unlimited => Self::UNLIMITED_SENTINEL,
            Self::Max(n) => i64::from(n),
        }
    }

    /// Decode a stored number. `-1` is unlimited; other negatives and
    /// values above `u32::MAX` are rejected.
    pub fn from_stored(value: i64) -> Option<Self> {
        if value == Self::UNLIMITED_SENTINEL {
            return Some(Self::Unlimited);
        }
        u32::try_from(value).ok().map(Self::Max)
    }
}

/// Value of a feature flag on a plan: a toggle or a numeric limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    Enabled(bool),
    Limit(UsageLimit),
}

impl FlagValue {
    pub const ON: FlagValue = FlagValue::Enabled(true);
    pub const OFF: FlagValue = FlagValue::Enabled(false);
    pub const UNLIMITED: FlagValue = FlagValue::Limit(UsageLimit::Unlimited);

    pub const fn max(n: u32) -> Self {
        FlagValue::Limit(UsageLimit::Max(n))
    }

    /// A limit of zero counts as disabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Enabled(on) => *on,
            Self::Limit(UsageLimit::Unlimited) => true,
            Self::Limit(UsageLimit::Max(n)) => *n > 0,
        }
    }

    /// Whether one more item may be created given `current_usage` items.
    pub fn allows(&self, current_usage: u32) -> bool {
        match self {
            Self::Enabled(on) => *on,
            Self::Limit(UsageLimit::Unlimited) => true,
            Self::Limit(UsageLimit::Max(n)) => current_usage < *n,
        }
    }

    pub fn limit(&self) -> Option<UsageLimit> {
        match self {
            Self::Limit(limit) => Some(*limit),
            Self::Enabled(_) => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum StoredFlagValue {
    Bool(bool),
    Number(i64),
}

impl Serialize for FlagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let stored = match self {
            Self::Enabled(on) => StoredFlagValue::Bool(*on),
            Self::Limit(limit) => StoredFlagValue::Number(limit.to_stored()),
        };
        stored.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FlagValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StoredFlagValue::deserialize(deserializer)? {
            StoredFlagValue::Bool(on) => Ok(Self::Enabled(on)),
            StoredFlagValue::Number(n) => UsageLimit::from_stored(n)
                .map(Self::Limit)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid feature limit {n}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_str_roundtrip() {
        for flag in &FeatureFlag::ALL {
            assert_eq!(FeatureFlag::parse(flag.as_str()), Some(*flag));
        }
        assert_eq!(FeatureFlag::parse("max_product"), None);
        assert_eq!(FeatureFlag::parse("MAX_PRODUCTS"), None);
    }

    #[test]
    fn camel_case_aliases() {
        assert_eq!(FeatureFlag::parse("maxProducts"), Some(FeatureFlag::MaxProducts));
        assert_eq!(FeatureFlag::parse("aiProductScan"), Some(FeatureFlag::AiProductScan));
    }

    #[test]
    fn sentinel_maps_to_unlimited() {
        assert_eq!(UsageLimit::from_stored(-1), Some(UsageLimit::Unlimited));
        assert_eq!(UsageLimit::from_stored(-2), None);
        assert_eq!(UsageLimit::from_stored(50), Some(UsageLimit::Max(50)));
        assert_eq!(UsageLimit::Unlimited.to_stored(), -1);
    }

    #[test]
    fn allows_respects_cap() {
        let cap = FlagValue::max(3);
        assert!(cap.allows(2));
        assert!(!cap.allows(3));
        assert!(FlagValue::UNLIMITED.allows(u32::MAX));
        assert!(!FlagValue::OFF.allows(0));
    }

    #[test]
    fn zero_limit_is_disabled() {
        assert!(!FlagValue::max(0).is_enabled());
        assert!(FlagValue::max(1).is_enabled());
    }

    #[test]
    fn flag_value_json_shape() {
        assert_eq!(serde_json::to_string(&FlagValue::UNLIMITED).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&FlagValue::ON).unwrap(), "true");
        let v: FlagValue = serde_json::from_str("250").unwrap();
        assert_eq!(v, FlagValue::max(250));
        assert!(serde_json::from_str::<FlagValue>("-5").is_err());
    }
}
