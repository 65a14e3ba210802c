//! Assisted-channel handoff errors.

use super::error_code::{self, KasirErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    #[error("invalid WhatsApp number: '{raw}'")]
    InvalidWhatsappNumber { raw: String },

    #[error("no plan change requested: already on {plan}")]
    NoChange { plan: String },
}

impl KasirErrorCode for HandoffError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidWhatsappNumber { .. } => error_code::INVALID_WHATSAPP_NUMBER,
            Self::NoChange { .. } => error_code::NO_PLAN_CHANGE,
        }
    }
}
