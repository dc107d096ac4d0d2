//! Luhn (mod-10) checksum validation.
//!
//! [`is_valid_card_number`] is the entry point used by form code: it applies
//! the minimum-length guard and then the checksum. The digit-level helpers
//! below it work on already-normalized digit values.

use crate::normalize::normalize;

/// Minimum number of digits before a number can be considered valid.
///
/// Shorter input is treated as still being typed, whatever its checksum.
pub const MIN_CARD_DIGITS: usize = 12;

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks raw card-number input for a plausible, checksum-valid number.
///
/// Non-digit characters are ignored. Returns `false` when fewer than
/// [`MIN_CARD_DIGITS`] digits remain, otherwise the Luhn result. There is no
/// upper length limit and no per-brand length check.
///
/// # Example
///
/// ```
/// use card_classifier::is_valid_card_number;
///
/// assert!(is_valid_card_number("4539 5787 6362 1486"));
/// assert!(!is_valid_card_number("4539 5787 6362 1487"));
/// assert!(!is_valid_card_number("0000 0000 000")); // 11 digits
/// ```
pub fn is_valid_card_number(raw: &str) -> bool {
    let digits = normalize(raw);
    digits.len() >= MIN_CARD_DIGITS && validate(digits.as_slice())
}

/// Validates a digit sequence using the Luhn algorithm.
///
/// No length policy is applied beyond rejecting an empty slice.
///
/// # Panics
///
/// Panics if any value is greater than 9. Use [`normalize`] to build a
/// digit sequence from text.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use card_classifier::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    luhn_residue(digits, 1) == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a digit sequence.
///
/// The rightmost digit is position 0 and is not doubled; positions 1, 3,
/// 5, ... are.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u64 {
    luhn_terms(digits, 1).map(u64::from).sum()
}

/// Per-digit Luhn contributions, rightmost first. Positions with
/// `i % 2 == doubled_parity` go through [`DOUBLE_TABLE`].
#[inline]
fn luhn_terms(digits: &[u8], doubled_parity: usize) -> impl Iterator<Item = u32> + '_ {
    digits.iter().rev().enumerate().map(move |(i, &digit)| {
        if i % 2 == doubled_parity {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        }
    })
}

/// Luhn sum modulo 10, reduced at every step so input length is unbounded.
#[inline]
fn luhn_residue(digits: &[u8], doubled_parity: usize) -> u32 {
    luhn_terms(digits, doubled_parity).fold(0, |acc, term| (acc + term) % 10)
}

/// Generates the check digit that completes a partial card number.
///
/// Every digit given here shifts one position left once the check digit is
/// appended, so the doubling parity is the opposite of [`compute_checksum`].
///
/// # Example
///
/// ```
/// use card_classifier::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    ((10 - luhn_residue(digits, 0)) % 10) as u8
}
