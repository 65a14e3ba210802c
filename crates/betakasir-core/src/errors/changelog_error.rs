//! Changelog editor errors.

use super::error_code::{self, KasirErrorCode};
use super::VersionError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangelogError {
    #[error("changelog entry is missing {field}")]
    MissingField { field: &'static str },

    #[error("changelog entry has invalid version: {0}")]
    InvalidVersion(#[from] VersionError),

    #[error("changelog entry has invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("changelog entry change #{index} has empty text")]
    EmptyChange { index: usize },
}

impl KasirErrorCode for ChangelogError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_CHANGELOG_ENTRY
    }
}
