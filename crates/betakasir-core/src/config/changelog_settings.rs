//! Changelog merge settings.

use serde::{Deserialize, Deserializer, Serialize};

use crate::changelog::VersionKey;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChangelogSettings {
    /// How versions are compared when de-duplicating. Default: exact.
    #[serde(deserialize_with = "deserialize_dedup_key")]
    pub dedup_key: Option<VersionKey>,
}

impl ChangelogSettings {
    pub fn effective_dedup_key(&self) -> VersionKey {
        self.dedup_key.unwrap_or_default()
    }
}

fn deserialize_dedup_key<'de, D>(deserializer: D) -> Result<Option<VersionKey>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            VersionKey::parse(&raw).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "unknown dedup_key '{raw}', expected exact or canonical"
                ))
            })
        })
        .transpose()
}
