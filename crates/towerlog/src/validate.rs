//! Identifier validation for airport codes and flight numbers.
//!
//! Validation is purely structural; uniqueness against the collections is
//! the caller's responsibility.

/// Check whether a string is a well-formed airport code.
///
/// A valid code is exactly three ASCII uppercase letters, e.g. `KHI`.
#[must_use]
pub fn airport_code_is_valid(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

/// Check whether a string is a well-formed flight number.
///
/// A valid number is an airline-style identifier: two ASCII uppercase
/// letters, a dash, then one to three decimal digits, e.g. `PK-301` or
/// `XY-1`.
#[must_use]
pub fn flight_number_is_valid(number: &str) -> bool {
    let bytes = number.as_bytes();
    if !(4..=6).contains(&bytes.len()) {
        return false;
    }
    bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2] == b'-'
        && bytes[3..].iter().all(u8::is_ascii_digit)
}
