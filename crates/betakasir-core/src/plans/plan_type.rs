//! Plan tiers and resolution of stored plan identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::EntitlementError;

/// Subscription tier, totally ordered `Free < Standard < Pro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Free,
    Standard,
    Pro,
}

impl PlanType {
    /// All tiers in ascending order.
    pub const ALL: [PlanType; 3] = [Self::Free, Self::Standard, Self::Pro];

    /// Plan used for stored identifiers outside the enumerated set, unless
    /// configuration says otherwise.
    pub const DEFAULT_FALLBACK: PlanType = PlanType::Pro;

    /// Strictly increasing with tier.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Free => 0,
            Self::Standard => 1,
            Self::Pro => 2,
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, Self::Free)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Standard => "standard",
            Self::Pro => "pro",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Standard => "Standard",
            Self::Pro => "Pro",
        }
    }

    /// Resolve a plan identifier read from the billing store.
    ///
    /// Matching ignores surrounding whitespace and ASCII case. Anything else
    /// resolves to `fallback`; the returned `PlanResolution` records the raw
    /// value so the caller can report it, and a warning is logged.
    pub fn resolve_stored(raw: &str, fallback: PlanType) -> PlanResolution {
        match raw.parse::<PlanType>() {
            Ok(plan_type) => PlanResolution {
                plan_type,
                unknown_raw: None,
            },
            Err(_) => {
                warn!(
                    raw,
                    fallback = fallback.as_str(),
                    "Unknown stored plan type, using fallback plan"
                );
                PlanResolution {
                    plan_type: fallback,
                    unknown_raw: Some(raw.to_string()),
                }
            }
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PlanType {
    type Err = EntitlementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "standard" => Ok(Self::Standard),
            "pro" => Ok(Self::Pro),
            _ => Err(EntitlementError::UnknownPlanType { raw: s.to_string() }),
        }
    }
}

/// Outcome of resolving a stored plan identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResolution {
    pub plan_type: PlanType,
    /// Raw stored value when the fallback rule applied.
    pub unknown_raw: Option<String>,
}

impl PlanResolution {
    pub fn is_fallback(&self) -> bool {
        self.unknown_raw.is_some()
    }

    /// The `UnknownPlanType` error that was absorbed by the fallback, if any.
    pub fn absorbed_error(&self) -> Option<EntitlementError> {
        self.unknown_raw
            .as_ref()
            .map(|raw| EntitlementError::UnknownPlanType { raw: raw.clone() })
    }
}
