//! Plan resolution settings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::plans::PlanType;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlanSettings {
    /// Plan applied to stored plan ids outside the known set. Default: pro.
    /// Matched case-insensitively, like `BETAKASIR_FALLBACK_PLAN`.
    #[serde(deserialize_with = "deserialize_plan")]
    pub fallback_plan: Option<PlanType>,
}

impl PlanSettings {
    pub fn effective_fallback_plan(&self) -> PlanType {
        self.fallback_plan.unwrap_or(PlanType::DEFAULT_FALLBACK)
    }
}

fn deserialize_plan<'de, D>(deserializer: D) -> Result<Option<PlanType>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| raw.parse::<PlanType>().map_err(serde::de::Error::custom))
        .transpose()
}
