//! Plan and feature entitlement errors.

use super::error_code::{self, KasirErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntitlementError {
    #[error("unknown feature flag: {flag}")]
    UnknownFeatureFlag { flag: String },

    /// Only surfaced by strict parsing. Stored plan ids resolve through the
    /// configured fallback instead of failing.
    #[error("unknown plan type: {raw}")]
    UnknownPlanType { raw: String },

    #[error("invalid subscription: {reason}")]
    InvalidSubscription { reason: String },
}

impl KasirErrorCode for EntitlementError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownFeatureFlag { .. } => error_code::UNKNOWN_FEATURE_FLAG,
            Self::UnknownPlanType { .. } => error_code::UNKNOWN_PLAN_TYPE,
            Self::InvalidSubscription { .. } => error_code::INVALID_SUBSCRIPTION,
        }
    }
}
