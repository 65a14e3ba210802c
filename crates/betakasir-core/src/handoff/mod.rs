//! Assisted plan changes over WhatsApp.
//!
//! Composes the request a user sends to support when a plan change cannot
//! go through in-app checkout. Delivery is the caller's job.

pub mod request;
pub mod whatsapp;

pub use request::AssistedRequest;
pub use whatsapp::normalize_whatsapp_number;
