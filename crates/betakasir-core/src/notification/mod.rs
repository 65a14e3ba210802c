//! Update notification policy.
//!
//! Compares the running app version against the administrator-configured
//! latest version and picks the message to show.

pub mod policy;
pub mod template;

pub use policy::{
    evaluate, evaluate_document, UpdateDecision, UpdateNotificationConfig,
    UpdateNotificationDocument,
};
pub use template::{interpolate, CURRENT_PLACEHOLDER, LATEST_PLACEHOLDER};
