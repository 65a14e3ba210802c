//! Semantic version parse errors.

use super::error_code::{self, KasirErrorCode};

/// Why a version string was rejected. Malformed input is never coerced to zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,

    #[error("version '{input}' has {found} segment(s), expected 3")]
    SegmentCount { input: String, found: usize },

    #[error("version '{input}' has non-numeric segment '{segment}'")]
    NonNumeric { input: String, segment: String },

    #[error("version '{input}' segment '{segment}' is out of range")]
    Overflow { input: String, segment: String },
}

impl KasirErrorCode for VersionError {
    fn error_code(&self) -> &'static str {
        error_code::VERSION_PARSE_ERROR
    }
}
