//! Indian tax-identifier validation.
//!
//! Pure, synchronous validators for GSTIN (15-character identifier with an
//! embedded base-36 checksum) and PAN (10-character identifier). Both return
//! plain booleans: callers only surface a generic "invalid" message, so no
//! failure-reason taxonomy is exposed and nothing here panics on bad input.

use lazy_static::lazy_static;
use regex::Regex;


lazy_static! {
    static ref GSTIN_SHAPE: Regex = Regex::new(r"^[0-9A-Z]{15}$").unwrap();
    static ref PAN_SHAPE: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap();
}

/// Entity-type codes permitted as the fourth character of a PAN.
const PAN_ENTITY_CODES: [char; 10] = ['P', 'C', 'H', 'A', 'B', 'G', 'L', 'F', 'T', 'J'];

/// Checksum factors, alternating by character position.
const CHECKSUM_FACTORS: [u32; 2] = [1, 2];

/// Validate a GSTIN.
///
/// Input is trimmed and uppercased before checking. A GSTIN is valid when it
/// is 15 alphanumeric characters, starts with a known state/UT code, embeds a
/// PAN-shaped segment in characters 3-12, carries the literal `Z` in position
/// 14 and ends with the correct base-36 checksum character.
pub fn validate_gstin(input: &str) -> bool {
    let gstin = input.trim().to_ascii_uppercase();
    if !GSTIN_SHAPE.is_match(&gstin) {
        return false;
    }
    if !is_valid_state_code(&gstin[0..2]) {
        return false;
    }
    if !PAN_SHAPE.is_match(&gstin[2..12]) {
        return false;
    }
    let chars: Vec<char> = gstin.chars().collect();
    if chars[13] != 'Z' {
        return false;
    }
    gstin_checksum(&gstin[0..14]) == Some(chars[14])
}

/// Validate a PAN.
///
/// Input is trimmed and uppercased. A PAN is valid when it matches
/// `[A-Z]{5}[0-9]{4}[A-Z]` and its fourth character is one of the enumerated
/// entity-type codes.
pub fn validate_pan(input: &str) -> bool {
    let pan = input.trim().to_ascii_uppercase();
    if !PAN_SHAPE.is_match(&pan) {
        return false;
    }
    pan.chars()
        .nth(3)
        .is_some_and(|c| PAN_ENTITY_CODES.contains(&c))
}

/// Compute the GSTIN checksum character for the first 14 characters.
///
/// Each character maps to its base-36 value, is multiplied by an alternating
/// factor of 1 or 2, and the product is reduced as `p / 36 + p % 36`. The
/// checksum is `(36 - sum % 36) % 36` mapped back to base-36.
///
/// Returns `None` when `body` is not exactly 14 base-36 characters.
pub fn gstin_checksum(body: &str) -> Option<char> {
    if body.chars().count() != 14 {
        return None;
    }
    let mut sum = 0u32;
    for (i, ch) in body.chars().enumerate() {
        let value = ch.to_ascii_uppercase().to_digit(36)?;
        let product = value * CHECKSUM_FACTORS[i % 2];
        sum += product / 36 + product % 36;
    }
    let check = (36 - sum % 36) % 36;
    char::from_digit(check, 36).map(|c| c.to_ascii_uppercase())
}

/// State/UT codes assigned under GST: 01-37 plus 97 (other territory).
fn is_valid_state_code(code: &str) -> bool {
    matches!(code.parse::<u8>(), Ok(1..=37) | Ok(97))
}
