//! Composite view over a single card-number entry.
//!
//! [`inspect`] normalizes the input once and derives the brand, validity
//! flag and display string from that one digit sequence, so the three can
//! never disagree. [`check`] is the strict variant that explains a rejection.

use std::fmt;

use crate::brand::BrandTag;
use crate::detect::detect_brand_digits;
use crate::error::ValidationError;
use crate::format::render;
use crate::luhn::{self, MIN_CARD_DIGITS};
use crate::mask;
use crate::normalize::{normalize, DigitSequence};

/// Everything a checkout form needs to know about a card-number field.
///
/// # Security
///
/// - The digits are zeroed on drop
/// - `Debug` and `Display` show a masked number only
#[derive(Clone, PartialEq, Eq)]
pub struct CardEntry {
    digits: DigitSequence,
    brand: BrandTag,
    valid: bool,
}

impl CardEntry {
    fn from_digits(digits: DigitSequence) -> Self {
        let brand = detect_brand_digits(digits.as_slice());
        let valid = digits.len() >= MIN_CARD_DIGITS && luhn::validate(digits.as_slice());
        Self {
            digits,
            brand,
            valid,
        }
    }

    /// Returns the detected brand.
    #[inline]
    pub const fn brand(&self) -> BrandTag {
        self.brand
    }

    /// Returns the validity flag (length guard and Luhn checksum).
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the number of digits entered.
    #[inline]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Returns the brand-grouped display string.
    pub fn display(&self) -> String {
        render(&self.digits, self.brand, " ")
    }

    /// Returns the last four digits, or an empty string if fewer were entered.
    pub fn last_four(&self) -> String {
        mask::last_four(self.digits.as_slice())
    }

    /// Returns the number masked for safe display: `****-****-****-1234`.
    pub fn masked(&self) -> String {
        mask::mask_digits(self.digits.as_slice())
    }

    /// Returns the normalized digit sequence.
    ///
    /// This exposes the full card number. Prefer `masked()` for display.
    #[inline]
    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }
}

impl fmt::Debug for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardEntry")
            .field("brand", &self.brand)
            .field("valid", &self.valid)
            .field("number", &self.masked())
            .finish()
    }
}

impl fmt::Display for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.masked())
    }
}

/// Inspects raw card-number input. Never fails.
///
/// # Example
///
/// ```
/// use card_classifier::{inspect, BrandTag};
///
/// let entry = inspect("3782-822463-10005");
/// assert_eq!(entry.brand(), BrandTag::Amex);
/// assert!(entry.is_valid());
/// assert_eq!(entry.display(), "3782 822463 10005");
/// assert_eq!(entry.last_four(), "0005");
///
/// let partial = inspect("4111 11");
/// assert_eq!(partial.brand(), BrandTag::Visa);
/// assert!(!partial.is_valid());
/// assert_eq!(partial.display(), "4111 11");
/// ```
pub fn inspect(raw: &str) -> CardEntry {
    let entry = CardEntry::from_digits(normalize(raw));
    tracing::trace!(
        brand = entry.brand.tag(),
        valid = entry.valid,
        digits = entry.length(),
        "inspected card entry"
    );
    entry
}

/// Inspects raw input and rejects it with a reason unless it is valid.
///
/// `check(raw).is_ok()` always equals
/// [`is_valid_card_number(raw)`](crate::is_valid_card_number).
///
/// # Example
///
/// ```
/// use card_classifier::{check, ValidationError};
///
/// assert!(check("4111 1111 1111 1111").is_ok());
/// assert_eq!(check("4111 1111 1111 1112").unwrap_err(), ValidationError::InvalidChecksum);
/// assert_eq!(check("--").unwrap_err(), ValidationError::NoDigits);
/// ```
pub fn check(raw: &str) -> Result<CardEntry, ValidationError> {
    let entry = inspect(raw);
    let length = entry.length();

    if length == 0 {
        return Err(ValidationError::NoDigits);
    }

    if length < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            length,
            minimum: MIN_CARD_DIGITS,
        });
    }

    if !entry.valid {
        tracing::trace!(masked = %entry.masked(), "checksum rejected");
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(entry)
}
