use super::error_code::{self, KasirErrorCode};
use super::{
    ChangelogError, ConfigError, EntitlementError, HandoffError, NotificationError, VersionError,
};

/// Top-level error type for the crate.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum KasirError {
    #[error("version error: {0}")]
    Version(#[from] VersionError),

    #[error("entitlement error: {0}")]
    Entitlement(#[from] EntitlementError),

    #[error("notification error: {0}")]
    Notification(#[from] NotificationError),

    #[error("changelog error: {0}")]
    Changelog(#[from] ChangelogError),

    #[error("handoff error: {0}")]
    Handoff(#[from] HandoffError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),
}

impl KasirErrorCode for KasirError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Version(e) => e.error_code(),
            Self::Entitlement(e) => e.error_code(),
            Self::Notification(e) => e.error_code(),
            Self::Changelog(e) => e.error_code(),
            Self::Handoff(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Document(_) => error_code::DOCUMENT_PARSE_ERROR,
        }
    }
}

/// Convenience type alias.
pub type KasirResult<T> = Result<T, KasirError>;
