//! # betakasir-core
//!
//! Pure decision rules behind the BetaKasir point-of-sale clients:
//! semantic version comparison, the subscription plan catalog, plan-change
//! and feature entitlement gating, update notifications, and changelog
//! merging. Nothing in this crate performs I/O against the document store;
//! callers fetch records, hand them in, and render what comes back.

pub mod changelog;
pub mod config;
pub mod errors;
pub mod handoff;
pub mod notification;
pub mod plans;
pub mod tracing;
pub mod version;

// Re-export the most commonly used types at the crate root.
pub use changelog::{merge, ChangelogEntry};
pub use config::KasirConfig;
pub use errors::error_code::KasirErrorCode;
pub use errors::{KasirError, KasirResult};
pub use notification::{evaluate, UpdateDecision, UpdateNotificationConfig};
pub use plans::{EntitlementGate, FeatureFlag, FlagValue, PlanCatalog, PlanChange, PlanType};
pub use version::{SemanticVersion, VersionComparator};
