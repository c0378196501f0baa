//! Luhn-style checksum used as a cheap plausibility filter.
//!
//! The parity of the doubled positions is derived from the length of the
//! input, and the rule is applied to the fragment alone rather than to a
//! full card number. A passing fragment is plausible, not authentic.

use super::LookupError;

/// Checks whether a digit string passes the parity-weighted digit sum.
///
/// # Errors
///
/// Returns [`LookupError::InvalidInput`] if the input is empty or contains
/// anything other than ASCII digits.
pub fn is_checksum_valid(digits: &str) -> Result<bool, LookupError> {
    if digits.is_empty() {
        return Err(LookupError::InvalidInput("empty digit string".to_owned()));
    }

    let parity = digits.len() & 1;
    let mut sum = 0u32;

    for (i, ch) in digits.chars().enumerate() {
        let mut digit = ch.to_digit(10).ok_or_else(|| {
            LookupError::InvalidInput(format!("'{ch}' is not a decimal digit"))
        })?;

        if (i & 1) ^ parity == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }

        sum += digit;
    }

    Ok(sum % 10 == 0)
}
