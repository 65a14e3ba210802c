//! UpdateNotificationPolicy: decide between "up to date" and "update available".

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NotificationSettings;
use crate::errors::NotificationError;
use crate::version::{SemanticVersion, VersionComparator};

use super::template::interpolate;

/// Administrator-maintained update settings, validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationConfig {
    pub latest_version: SemanticVersion,
    pub up_to_date_message: String,
    pub update_available_message: String,
    pub whatsapp_number: String,
    pub up_to_date_title: String,
    pub update_available_title: String,
}

impl UpdateNotificationConfig {
    /// Build from admin-entered values, with titles from `settings`.
    pub fn new(
        latest_version: &str,
        up_to_date_message: impl Into<String>,
        update_available_message: impl Into<String>,
        whatsapp_number: impl Into<String>,
        settings: &NotificationSettings,
    ) -> Result<Self, NotificationError> {
        let config = Self {
            latest_version: SemanticVersion::parse(latest_version)
                .map_err(NotificationError::InvalidLatestVersion)?,
            up_to_date_message: up_to_date_message.into(),
            update_available_message: update_available_message.into(),
            whatsapp_number: whatsapp_number.into(),
            up_to_date_title: settings.effective_up_to_date_title().to_string(),
            update_available_title: settings.effective_update_available_title().to_string(),
        };
        config.validate_for_save()?;
        Ok(config)
    }

    /// Reject empty message templates. Run before an admin save and on every evaluation.
    pub fn validate_for_save(&self) -> Result<(), NotificationError> {
        if self.up_to_date_message.trim().is_empty() {
            return Err(NotificationError::EmptyTemplate {
                field: "upToDateMessage",
            });
        }
        if self.update_available_message.trim().is_empty() {
            return Err(NotificationError::EmptyTemplate {
                field: "updateAvailableMessage",
            });
        }
        Ok(())
    }
}

/// The settings document as stored. Every field is loose until
/// `into_config` validates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateNotificationDocument {
    pub latest_version: String,
    pub up_to_date_message: String,
    pub update_available_message: String,
    pub whatsapp_number: String,
    pub up_to_date_title: Option<String>,
    pub update_available_title: Option<String>,
}

impl UpdateNotificationDocument {
    /// Validate into a config. Titles missing from the document come from `settings`.
    pub fn into_config(
        self,
        settings: &NotificationSettings,
    ) -> Result<UpdateNotificationConfig, NotificationError> {
        let latest_version = SemanticVersion::parse(&self.latest_version)
            .map_err(NotificationError::InvalidLatestVersion)?;

        let config = UpdateNotificationConfig {
            latest_version,
            up_to_date_message: self.up_to_date_message,
            update_available_message: self.update_available_message,
            whatsapp_number: self.whatsapp_number,
            up_to_date_title: non_empty_or(
                self.up_to_date_title,
                settings.effective_up_to_date_title(),
            ),
            update_available_title: non_empty_or(
                self.update_available_title,
                settings.effective_update_available_title(),
            ),
        };
        config.validate_for_save()?;
        Ok(config)
    }
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// What the client should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDecision {
    pub has_update: bool,
    pub title: String,
    pub message: String,
}

/// Compare `current_version` against `config.latest_version`.
///
/// With an update available, the update template gets both versions
/// interpolated; otherwise the up-to-date template gets the current version.
pub fn evaluate(
    current_version: &SemanticVersion,
    config: &UpdateNotificationConfig,
) -> Result<UpdateDecision, NotificationError> {
    config.validate_for_save()?;

    let has_update = VersionComparator::is_newer(&config.latest_version, current_version);
    let current = current_version.to_string();
    let latest = config.latest_version.to_string();

    let (title, template) = if has_update {
        (&config.update_available_title, &config.update_available_message)
    } else {
        (&config.up_to_date_title, &config.up_to_date_message)
    };

    debug!(current = %current, latest = %latest, has_update, "Update notification evaluated");

    Ok(UpdateDecision {
        has_update,
        title: title.clone(),
        message: interpolate(template, &current, &latest),
    })
}

/// Parse the running version and the stored document, then `evaluate`.
pub fn evaluate_document(
    current_version: &str,
    document: &UpdateNotificationDocument,
    settings: &NotificationSettings,
) -> Result<UpdateDecision, NotificationError> {
    let current = SemanticVersion::parse(current_version)
        .map_err(NotificationError::InvalidCurrentVersion)?;
    let config = document.clone().into_config(settings)?;
    evaluate(&current, &config)
}
