//! A user's subscription, read from the billing store and evaluated at an
//! explicit instant. The core never mutates it and never reads the clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::EntitlementError;

use super::plan_type::{PlanResolution, PlanType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Trial,
    Expired,
}

impl SubscriptionStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "trial" => Some(Self::Trial),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan_type: PlanType,
    pub status: SubscriptionStatus,
    pub start_date: DateTime<Utc>,
    /// Open-ended when absent.
    pub end_date: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Check the record invariants at `now`: the end date is not before the
    /// start date, and an expired subscription ended in the past.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), EntitlementError> {
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(EntitlementError::InvalidSubscription {
                    reason: format!(
                        "end date {} is before start date {}",
                        end.to_rfc3339(),
                        self.start_date.to_rfc3339()
                    ),
                });
            }
        }

        if self.status == SubscriptionStatus::Expired {
            match self.end_date {
                Some(end) if end < now => {}
                Some(end) => {
                    return Err(EntitlementError::InvalidSubscription {
                        reason: format!("expired subscription ends in the future ({})", end.to_rfc3339()),
                    });
                }
                None => {
                    return Err(EntitlementError::InvalidSubscription {
                        reason: "expired subscription has no end date".to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Started, not marked expired, and not past its end date.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.status != SubscriptionStatus::Expired
            && self.start_date <= now
            && self.end_date.map_or(true, |end| now <= end)
    }

    /// Whole days left before the end date; `None` for open-ended subscriptions.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        self.end_date.map(|end| (end - now).num_days().max(0))
    }

    /// Plan whose entitlements apply at `now`. Inactive subscriptions get `Free`.
    pub fn effective_plan(&self, now: DateTime<Utc>) -> PlanType {
        if self.is_active_at(now) {
            self.plan_type
        } else {
            PlanType::Free
        }
    }
}

/// Subscription as stored in the billing document. Plan and status are
/// loose strings here and get resolved by `into_subscription`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDocument {
    #[serde(alias = "plan")]
    pub plan_type: String,
    pub status: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl SubscriptionDocument {
    /// Convert to a strict `Subscription`. Unknown plan ids resolve to
    /// `fallback` (reported in the returned `PlanResolution`); an unknown
    /// status is an error.
    pub fn into_subscription(
        self,
        fallback: PlanType,
    ) -> Result<(Subscription, PlanResolution), EntitlementError> {
        let status = SubscriptionStatus::parse(&self.status).ok_or_else(|| {
            EntitlementError::InvalidSubscription {
                reason: format!("unknown status '{}'", self.status),
            }
        })?;
        let resolution = PlanType::resolve_stored(&self.plan_type, fallback);

        let subscription = Subscription {
            plan_type: resolution.plan_type,
            status,
            start_date: self.start_date,
            end_date: self.end_date,
        };
        Ok((subscription, resolution))
    }
}
