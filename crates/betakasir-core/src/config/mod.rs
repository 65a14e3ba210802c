pub mod changelog_settings;
pub mod kasir_config;
pub mod logging_settings;
pub mod notification_settings;
pub mod plan_settings;

pub use changelog_settings::ChangelogSettings;
pub use kasir_config::KasirConfig;
pub use logging_settings::LoggingSettings;
pub use notification_settings::NotificationSettings;
pub use plan_settings::PlanSettings;
