//! Card number formatting for display.
//!
//! The grouping comes from the brand passed in, not from the digits:
//!
//! - **American Express**: `XXXX XXXXXX XXXXX`, at most 17 characters
//! - **Everything else** (unknown included): `XXXX XXXX XXXX XXXX`, at most
//!   19 characters
//!
//! Formatting is purely presentational. It never rejects input and never
//! pads: partial input gives a partial, correctly grouped string and extra
//! digits are dropped.
//!
//! # Example
//!
//! ```
//! use card_classifier::format::{format_for_display, format_with_separator};
//! use card_classifier::BrandTag;
//!
//! assert_eq!(format_for_display("4111111111111111", BrandTag::Visa), "4111 1111 1111 1111");
//! assert_eq!(format_for_display("378282246310005", BrandTag::Amex), "3782 822463 10005");
//! assert_eq!(format_for_display("41111", BrandTag::Visa), "4111 1");
//!
//! assert_eq!(
//!     format_with_separator("4111111111111111", BrandTag::Visa, "-"),
//!     "4111-1111-1111-1111"
//! );
//! ```

use crate::brand::BrandTag;
use crate::detect::detect_brand_digits;
use crate::normalize::{normalize, DigitSequence};

const SPACE: &str = " ";

/// Formats raw input for display using the grouping of `brand`.
///
/// # Example
///
/// ```
/// use card_classifier::{format_for_display, BrandTag};
///
/// assert_eq!(format_for_display("3782-8224-6310-005", BrandTag::Amex), "3782 822463 10005");
/// assert_eq!(format_for_display("", BrandTag::Visa), "");
/// ```
pub fn format_for_display(raw: &str, brand: BrandTag) -> String {
    format_with_separator(raw, brand, SPACE)
}

/// Formats raw input with a custom group separator.
///
/// The digit limit (15 for Amex, 16 otherwise) is the same as for
/// [`format_for_display`].
pub fn format_with_separator(raw: &str, brand: BrandTag, separator: &str) -> String {
    render(&normalize(raw), brand, separator)
}

/// Detects the brand from the input itself and formats accordingly.
///
/// Handy for formatting a field as the user types.
///
/// # Example
///
/// ```
/// use card_classifier::format::format_auto;
///
/// assert_eq!(format_auto("37828224631"), "3782 822463 1");
/// assert_eq!(format_auto("4111111111"), "4111 1111 11");
/// ```
pub fn format_auto(raw: &str) -> String {
    let digits = normalize(raw);
    let brand = detect_brand_digits(digits.as_slice());
    render(&digits, brand, SPACE)
}

/// Splits raw input into the digit groups `brand` would display.
///
/// Empty groups are never returned.
///
/// # Example
///
/// ```
/// use card_classifier::format::split_into_groups;
/// use card_classifier::BrandTag;
///
/// assert_eq!(
///     split_into_groups("378282246310005", BrandTag::Amex),
///     vec!["3782", "822463", "10005"]
/// );
/// assert_eq!(split_into_groups("411111", BrandTag::Visa), vec!["4111", "11"]);
/// ```
pub fn split_into_groups(raw: &str, brand: BrandTag) -> Vec<String> {
    groups(&normalize(raw), brand)
}

/// Renders an already-normalized sequence.
pub(crate) fn render(digits: &DigitSequence, brand: BrandTag, separator: &str) -> String {
    groups(digits, brand).join(separator)
}

fn groups(digits: &DigitSequence, brand: BrandTag) -> Vec<String> {
    let shown = &digits.as_slice()[..digits.len().min(brand.max_display_digits())];

    let mut groups: Vec<String> = Vec::with_capacity(brand.group_sizes().len());
    let mut pos = 0;

    for &size in brand.group_sizes() {
        if pos >= shown.len() {
            break;
        }
        let end = (pos + size).min(shown.len());
        groups.push(shown[pos..end].iter().map(|&d| (b'0' + d) as char).collect());
        pos = end;
    }

    groups
}
