//! GSTIN format validation.
//!
//! A GSTIN is 15 characters: a 2-digit state code, the 10-character PAN of
//! the registrant, a 1-character entity number, the letter "Z", and a
//! mod-36 check character.

use std::fmt;

use super::states;

/// Error returned when a GSTIN fails format validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GstinError {
    /// The invalid input value.
    pub value: String,
    /// Why the value failed validation.
    pub reason: String,
}

impl fmt::Display for GstinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid GSTIN '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for GstinError {}

fn err(value: &str, reason: impl Into<String>) -> GstinError {
    GstinError {
        value: value.into(),
        reason: reason.into(),
    }
}

/// Validate a GSTIN by format and checksum (no network call).
///
/// Returns the (state_code, pan) split on success.
pub fn validate_gstin(gstin: &str) -> Result<(&str, &str), GstinError> {
    let gstin = gstin.trim();

    if gstin.len() != 15 {
        return Err(err(gstin, "must be exactly 15 characters"));
    }
    if !gstin.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()) {
        return Err(err(gstin, "must contain only digits and uppercase letters"));
    }

    let state_code = &gstin[..2];
    if !states::is_known_state_code(state_code) {
        return Err(err(
            gstin,
            format!("'{state_code}' is not an assigned GST state code"),
        ));
    }

    let pan = &gstin[2..12];
    let pan_bytes = pan.as_bytes();
    let pan_ok = pan_bytes[..5].iter().all(u8::is_ascii_uppercase)
        && pan_bytes[5..9].iter().all(u8::is_ascii_digit)
        && pan_bytes[9].is_ascii_uppercase();
    if !pan_ok {
        return Err(err(
            gstin,
            "characters 3-12 must be a PAN (5 letters, 4 digits, 1 letter)",
        ));
    }

    if gstin.as_bytes()[13] != b'Z' {
        return Err(err(gstin, "character 14 must be 'Z'"));
    }

    let expected = check_character(&gstin[..14]);
    let actual = gstin.as_bytes()[14] as char;
    if actual != expected {
        return Err(err(
            gstin,
            format!("check character mismatch — expected '{expected}', got '{actual}'"),
        ));
    }

    Ok((state_code, pan))
}

const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Compute the mod-36 check character over the first 14 characters.
///
/// Character values are 0-9 then A=10..Z=35; weights alternate 1, 2 from the
/// left; each weighted product contributes quotient + remainder of a
/// division by 36.
fn check_character(body: &str) -> char {
    let mut sum: u32 = 0;
    for (i, b) in body.bytes().enumerate() {
        let value = CHARSET.iter().position(|&c| c == b).unwrap_or(0) as u32;
        let factor = if i % 2 == 0 { 1 } else { 2 };
        let product = value * factor;
        sum += product / 36 + product % 36;
    }
    CHARSET[((36 - sum % 36) % 36) as usize] as char
}
