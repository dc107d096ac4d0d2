//! Error types.
//!
//! The three entry points (`is_valid_card_number`, `detect_brand`,
//! `format_for_display`) never fail. These types exist for callers that want
//! a reason: the strict [`check`](crate::card::check) variant and parsing a
//! brand tag from text.

use std::fmt;

/// Why a card number was rejected by [`check`](crate::card::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input contained no digits at all.
    NoDigits,

    /// The card number has too few digits.
    TooShort {
        /// The actual number of digits provided.
        length: usize,
        /// The minimum required digits (12).
        minimum: usize,
    },

    /// The Luhn checksum validation failed.
    ///
    /// This usually indicates a typo in the card number.
    InvalidChecksum,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDigits => write!(f, "card number contains no digits"),

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} digits, minimum is {}",
                    length, minimum
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A brand name that does not match any [`BrandTag`](crate::BrandTag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBrandError {
    input: String,
}

impl ParseBrandError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseBrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown card brand '{}' (expected visa, mastercard, amex, discover, jcb or diners)",
            self.input.escape_default()
        )
    }
}

impl std::error::Error for ParseBrandError {}
