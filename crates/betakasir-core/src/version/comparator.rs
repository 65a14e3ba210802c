//! Version ordering for update checks.

use std::cmp::Ordering;

use crate::errors::VersionError;

use super::SemanticVersion;

/// Stateless comparator over `SemanticVersion`.
pub struct VersionComparator;

impl VersionComparator {
    pub fn parse(text: &str) -> Result<SemanticVersion, VersionError> {
        SemanticVersion::parse(text)
    }

    /// Lexicographic over `(major, minor, patch)`.
    pub fn compare(a: &SemanticVersion, b: &SemanticVersion) -> Ordering {
        a.cmp(b)
    }

    /// `true` only when `candidate` is strictly greater than `baseline`.
    pub fn is_newer(candidate: &SemanticVersion, baseline: &SemanticVersion) -> bool {
        Self::compare(candidate, baseline) == Ordering::Greater
    }

    /// Parse both sides, then `is_newer`. Either side failing to parse is an error.
    pub fn is_newer_str(candidate: &str, baseline: &str) -> Result<bool, VersionError> {
        let candidate = SemanticVersion::parse(candidate)?;
        let baseline = SemanticVersion::parse(baseline)?;
        Ok(Self::is_newer(&candidate, &baseline))
    }
}
