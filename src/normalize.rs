//! Digit normalization.
//!
//! Every operation in this crate starts by reducing raw input to the ordered
//! ASCII digits it contains. Validation, classification and formatting all go
//! through [`normalize`], so they always agree on what "the card number" is.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The digits extracted from raw card-number input, as values `0..=9`.
///
/// The buffer is zeroed when dropped. `Debug` shows a masked form only and
/// there is deliberately no `Display` impl.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    /// Returns the digit values.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True when the input contained no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Renders the digits back to an ASCII string.
    ///
    /// This exposes the full card number. Never log the result.
    pub fn to_digit_string(&self) -> String {
        self.digits.iter().map(|&d| (b'0' + d) as char).collect()
    }
}

impl From<&[u8]> for DigitSequence {
    /// Builds a sequence from digit values, dropping anything above 9.
    fn from(values: &[u8]) -> Self {
        Self {
            digits: values.iter().copied().filter(|&d| d <= 9).collect(),
        }
    }
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitSequence")
            .field("digits", &crate::mask::mask_digits(&self.digits))
            .field("length", &self.digits.len())
            .finish()
    }
}

/// Extracts the decimal digits `0`-`9` from `input`, preserving order.
///
/// Everything else (spaces, dashes, letters, non-ASCII digits) is discarded.
///
/// # Example
///
/// ```
/// use card_classifier::normalize::normalize;
///
/// let seq = normalize("4111-1111 1111.1111");
/// assert_eq!(seq.len(), 16);
/// assert_eq!(seq.to_digit_string(), "4111111111111111");
///
/// assert!(normalize("no digits here").is_empty());
/// ```
pub fn normalize(input: &str) -> DigitSequence {
    DigitSequence {
        digits: input
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect(),
    }
}

/// Strips everything but digits, returning them as a string.
///
/// # Example
///
/// ```
/// use card_classifier::normalize::strip_non_digits;
///
/// assert_eq!(strip_non_digits("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_non_digits("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(
            normalize("4111 1111-1111.1111").as_slice(),
            &[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize("  --  ").is_empty());
        assert!(normalize("abc").is_empty());
    }

    #[test]
    fn test_normalize_ignores_unicode_digits() {
        // Arabic-Indic and fullwidth digits are not ASCII 0-9
        assert_eq!(normalize("٤١١١").len(), 0);
        assert_eq!(normalize("４1").to_digit_string(), "1");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("  4539 5787-6362 1486 x");
        let twice = normalize(&once.to_digit_string());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_non_digits() {
        assert_eq!(strip_non_digits("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(strip_non_digits("card: 3782-822463-10005!"), "378282246310005");
        assert_eq!(strip_non_digits(""), "");
    }

    #[test]
    fn test_from_digit_values() {
        let seq = DigitSequence::from(&[4u8, 1, 12, 1][..]);
        assert_eq!(seq.as_slice(), &[4, 1, 1]);
    }

    #[test]
    fn test_debug_is_masked() {
        let seq = normalize("4111111111111111");
        let debug = format!("{:?}", seq);
        assert!(!debug.contains("4111111111111111"));
        assert!(debug.contains("****"));
    }
}
