//! WhatsApp number normalization.

use crate::errors::HandoffError;

/// Indonesian country code, substituted for a leading trunk `0`.
pub const DEFAULT_COUNTRY_CODE: &str = "62";

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// Normalize to the international digits-only form WhatsApp expects.
///
/// Spaces, dashes, dots and parentheses are dropped, a leading `+` is
/// removed, and a leading `0` is replaced by the country code.
pub fn normalize_whatsapp_number(raw: &str) -> Result<String, HandoffError> {
    let invalid = || HandoffError::InvalidWhatsappNumber {
        raw: raw.to_string(),
    };

    let compact: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();
    let without_plus = compact.strip_prefix('+').unwrap_or(&compact);

    if without_plus.is_empty() || !without_plus.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let normalized = match without_plus.strip_prefix('0') {
        Some(rest) => format!("{DEFAULT_COUNTRY_CODE}{rest}"),
        None => without_plus.to_string(),
    };

    if !(MIN_DIGITS..=MAX_DIGITS).contains(&normalized.len()) {
        return Err(invalid());
    }
    Ok(normalized)
}
