//! Stable error codes handed to the presentation layer.
//!
//! Screens map these codes to dialogs; message text is free to change,
//! codes are not.

pub const VERSION_PARSE_ERROR: &str = "VERSION_PARSE_ERROR";
pub const UNKNOWN_FEATURE_FLAG: &str = "UNKNOWN_FEATURE_FLAG";
pub const UNKNOWN_PLAN_TYPE: &str = "UNKNOWN_PLAN_TYPE";
pub const INVALID_SUBSCRIPTION: &str = "INVALID_SUBSCRIPTION";
pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
pub const INVALID_CHANGELOG_ENTRY: &str = "INVALID_CHANGELOG_ENTRY";
pub const INVALID_WHATSAPP_NUMBER: &str = "INVALID_WHATSAPP_NUMBER";
pub const NO_PLAN_CHANGE: &str = "NO_PLAN_CHANGE";
pub const DOCUMENT_PARSE_ERROR: &str = "DOCUMENT_PARSE_ERROR";
pub const CONFIG_IO_ERROR: &str = "CONFIG_IO_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_OVERRIDE_ERROR: &str = "CONFIG_OVERRIDE_ERROR";

/// Every error type in the crate exposes a machine-readable code.
pub trait KasirErrorCode {
    fn error_code(&self) -> &'static str;
}
