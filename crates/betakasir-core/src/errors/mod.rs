pub mod error_code;

mod changelog_error;
mod config_error;
mod entitlement_error;
mod handoff_error;
mod kasir_error;
mod notification_error;
mod version_error;

pub use changelog_error::ChangelogError;
pub use config_error::ConfigError;
pub use entitlement_error::EntitlementError;
pub use handoff_error::HandoffError;
pub use kasir_error::{KasirError, KasirResult};
pub use notification_error::NotificationError;
pub use version_error::VersionError;
