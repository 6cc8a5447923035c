//! Parental-control PIN checksum.
//!
//! Not a password hash. The checksum only keeps the PIN from sitting in the
//! settings file in plain text; anyone with access to the file can brute-force
//! the 10 000 possible PINs instantly.

/// Number of digits a PIN must have.
pub const PIN_LENGTH: usize = 4;

/// Exactly four ASCII digits.
#[must_use]
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}

/// Rolling `h = h * 31 + unit` over UTF-16 code units, wrapped to 32 bits and
/// rendered in decimal.
#[must_use]
pub fn pin_checksum(pin: &str) -> String {
    pin.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
        .to_string()
}

/// Compare an entered PIN against a stored checksum.
#[must_use]
pub fn pin_matches(entered: &str, stored: &str) -> bool {
    pin_checksum(entered) == stored
}
