use serde::{Deserialize, Serialize};

use crate::errors::HandoffError;
use crate::plans::{BillingCycle, EntitlementGate, PlanChange, PlanType};

use super::whatsapp::normalize_whatsapp_number;

/// Message and destination for a plan change handled by support.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistedRequest {
    pub phone: String,
    pub message: String,
    pub change: PlanChange,
}

impl AssistedRequest {
    /// Compose the request for moving `business_name` from `current` to `target`.
    pub fn compose(
        whatsapp_number: &str,
        business_name: &str,
        current: PlanType,
        target: PlanType,
        cycle: BillingCycle,
    ) -> Result<Self, HandoffError> {
        let change = EntitlementGate::classify_change(current, target);
        if change == PlanChange::Same {
            return Err(HandoffError::NoChange {
                plan: current.as_str().to_string(),
            });
        }
        let phone = normalize_whatsapp_number(whatsapp_number)?;

        let verb = match change {
            PlanChange::Upgrade => "upgrade",
            _ => "downgrade",
        };
        let cycle_label = match cycle {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        };
        let business = business_name.trim();
        let business = if business.is_empty() { "-" } else { business };

        let message = format!(
            "Hello BetaKasir, I would like to {verb} my plan from {} to {} ({cycle_label} billing).\nBusiness: {business}",
            current.display_name(),
            target.display_name(),
        );

        Ok(Self {
            phone,
            message,
            change,
        })
    }
}
