//! Masking helpers.
//!
//! Only the last four digits of a card number are ever shown. These helpers
//! back the `Debug` impls of [`DigitSequence`](crate::normalize::DigitSequence)
//! and [`CardEntry`](crate::card::CardEntry), tracing events and the CLI.

use crate::normalize::normalize;

/// Masks digit values, showing only the last four.
///
/// Format: `****-****-****-1234`. Four or fewer digits are fully masked.
///
/// # Example
///
/// ```
/// use card_classifier::mask::mask_digits;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(mask_digits(&digits), "****-****-****-1111");
/// assert_eq!(mask_digits(&[1, 2, 3]), "***");
/// ```
pub fn mask_digits(digits: &[u8]) -> String {
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let masked_count = len - 4;
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Separator before last 4 only on a group boundary
    if masked_count % 4 == 0 {
        result.push('-');
    }

    result.push_str(&last_four(digits));
    result
}

/// Masks raw input after normalizing it.
///
/// # Example
///
/// ```
/// use card_classifier::mask::mask_string;
///
/// assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
/// ```
pub fn mask_string(input: &str) -> String {
    mask_digits(normalize(input).as_slice())
}

/// Returns the last four digits as a string.
///
/// Returns an empty string if there are fewer than 4 digits.
pub fn last_four(digits: &[u8]) -> String {
    if digits.len() < 4 {
        return String::new();
    }
    digits[digits.len() - 4..]
        .iter()
        .map(|&d| (b'0' + d) as char)
        .collect()
}
