//! Top-level configuration, loaded from `betakasir.toml` with
//! `BETAKASIR_*` environment overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::changelog::VersionKey;
use crate::errors::ConfigError;
use crate::plans::PlanType;

use super::logging_settings::check_directive;
use super::{ChangelogSettings, LoggingSettings, NotificationSettings, PlanSettings};

pub const CONFIG_FILE_NAME: &str = "betakasir.toml";

pub const ENV_FALLBACK_PLAN: &str = "BETAKASIR_FALLBACK_PLAN";
pub const ENV_CHANGELOG_DEDUP: &str = "BETAKASIR_CHANGELOG_DEDUP";
pub const ENV_LOG_LEVEL: &str = "BETAKASIR_LOG_LEVEL";

/// Aggregates all settings. Passed by value or reference into the
/// decision functions; there is no process-wide instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KasirConfig {
    pub plans: PlanSettings,
    pub changelog: ChangelogSettings,
    pub notification: NotificationSettings,
    pub logging: LoggingSettings,
}

impl KasirConfig {
    /// Parse from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks serde cannot express on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.logging.level {
            check_directive(level).map_err(|reason| ConfigError::InvalidValue {
                key: "logging.level",
                value: level.clone(),
                reason,
            })?;
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load `<root>/betakasir.toml` when present, defaults otherwise, then
    /// apply environment overrides.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let mut config = if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply `BETAKASIR_*` variables. A set but invalid value is an error.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(ENV_FALLBACK_PLAN) {
            let plan = value
                .parse::<PlanType>()
                .map_err(|_| invalid_override(ENV_FALLBACK_PLAN, &value))?;
            self.plans.fallback_plan = Some(plan);
        }

        if let Ok(value) = std::env::var(ENV_CHANGELOG_DEDUP) {
            let key = VersionKey::parse(&value)
                .ok_or_else(|| invalid_override(ENV_CHANGELOG_DEDUP, &value))?;
            self.changelog.dedup_key = Some(key);
        }

        if let Ok(value) = std::env::var(ENV_LOG_LEVEL) {
            check_directive(&value).map_err(|_| invalid_override(ENV_LOG_LEVEL, &value))?;
            self.logging.level = Some(value);
        }

        Ok(())
    }
}

fn invalid_override(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
    }
}
