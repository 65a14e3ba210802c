//! Default titles for update notifications.

use serde::{Deserialize, Serialize};

pub const DEFAULT_UP_TO_DATE_TITLE: &str = "Up to Date";
pub const DEFAULT_UPDATE_AVAILABLE_TITLE: &str = "Update Available";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NotificationSettings {
    pub up_to_date_title: Option<String>,
    pub update_available_title: Option<String>,
}

impl NotificationSettings {
    pub fn effective_up_to_date_title(&self) -> &str {
        self.up_to_date_title
            .as_deref()
            .unwrap_or(DEFAULT_UP_TO_DATE_TITLE)
    }

    pub fn effective_update_available_title(&self) -> &str {
        self.update_available_title
            .as_deref()
            .unwrap_or(DEFAULT_UPDATE_AVAILABLE_TITLE)
    }
}
