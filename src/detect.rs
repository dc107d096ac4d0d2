//! Card brand detection by prefix.
//!
//! Brands are tested in a fixed priority order and the first match wins.
//! The `match` arms below are that order; do not reorder them. Only the
//! leading digits are inspected, the total length is never checked, and
//! input too short to complete a pattern does not match it.

use crate::brand::BrandTag;
use crate::normalize::normalize;

/// Detects the card brand from raw input.
///
/// Non-digit characters are ignored. Returns `BrandTag::Unknown` when no
/// prefix matches, including for empty input.
///
/// # Example
///
/// ```
/// use card_classifier::{detect_brand, BrandTag};
///
/// assert_eq!(detect_brand("4111 1111 1111 1111"), BrandTag::Visa);
/// assert_eq!(detect_brand("3782"), BrandTag::Amex);
/// assert_eq!(detect_brand(""), BrandTag::Unknown);
/// ```
pub fn detect_brand(raw: &str) -> BrandTag {
    detect_brand_digits(normalize(raw).as_slice())
}

/// Detects the card brand from digit values (0-9).
///
/// # Example
///
/// ```
/// use card_classifier::detect::detect_brand_digits;
/// use card_classifier::BrandTag;
///
/// assert_eq!(detect_brand_digits(&[5, 5, 0, 0]), BrandTag::Mastercard);
/// assert_eq!(detect_brand_digits(&[2, 7, 2, 1]), BrandTag::Unknown);
/// ```
pub fn detect_brand_digits(digits: &[u8]) -> BrandTag {
    match digits {
        // Visa: 4
        [4, ..] => BrandTag::Visa,

        // Mastercard: 51-55, 2221-2720
        [5, 1..=5, ..] => BrandTag::Mastercard,
        [2, 2, 2, 1..=9, ..] => BrandTag::Mastercard, // 2221-2229
        [2, 2, 3..=9, ..] => BrandTag::Mastercard,    // 223-229
        [2, 3..=6, ..] => BrandTag::Mastercard,       // 23-26
        [2, 7, 0..=1, 0..=9, ..] => BrandTag::Mastercard, // 2700-2719
        [2, 7, 2, 0, ..] => BrandTag::Mastercard,     // 2720

        // American Express: 34, 37
        [3, 4, ..] | [3, 7, ..] => BrandTag::Amex,

        // Discover: 6011, 65, 644-649, 622 band
        [6, 0, 1, 1, ..] => BrandTag::Discover,
        [6, 5, ..] => BrandTag::Discover,
        [6, 4, 4..=9, ..] => BrandTag::Discover,
        [6, 2, 2, rest @ ..] if discover_622_band(rest) => BrandTag::Discover,

        // JCB: 35
        [3, 5, ..] => BrandTag::Jcb,

        // Diners Club: 300-305, 36, 38
        [3, 0, 0..=5, ..] => BrandTag::Diners,
        [3, 6, ..] | [3, 8, ..] => BrandTag::Diners,

        _ => BrandTag::Unknown,
    }
}

/// Digits following `622` in the Discover band:
/// `12[6-9] | 1[3-9] | [2-8] | 9[01] | 92[0-5]`.
#[inline]
fn discover_622_band(rest: &[u8]) -> bool {
    matches!(
        rest,
        [1, 2, 6..=9, ..] | [1, 3..=9, ..] | [2..=8, ..] | [9, 0..=1, ..] | [9, 2, 0..=5, ..]
    )
}
