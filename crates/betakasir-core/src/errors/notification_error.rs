//! Update notification errors.

use super::error_code::{self, KasirErrorCode};
use super::VersionError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotificationError {
    #[error("invalid notification config: latest version rejected: {0}")]
    InvalidLatestVersion(#[source] VersionError),

    #[error("invalid notification config: current version rejected: {0}")]
    InvalidCurrentVersion(#[source] VersionError),

    #[error("invalid notification config: {field} is empty")]
    EmptyTemplate { field: &'static str },
}

impl KasirErrorCode for NotificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrentVersion(e) => e.error_code(),
            Self::InvalidLatestVersion(_) | Self::EmptyTemplate { .. } => {
                error_code::INVALID_CONFIG
            }
        }
    }
}
