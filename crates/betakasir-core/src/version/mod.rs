//! Semantic versions and the comparator used by the update flow.
//!
//! ## Components
//! - **semver**: `SemanticVersion` parsing (strict `major.minor.patch`)
//! - **comparator**: ordering and the `is_newer` check

pub mod comparator;
pub mod semver;

pub use comparator::VersionComparator;
pub use semver::SemanticVersion;
