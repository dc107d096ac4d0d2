//! Fuzz target for the Luhn checksum.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use card_classifier::{is_valid_card_number, luhn, MIN_CARD_DIGITS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let checksum_ok = luhn::validate(&digits);

    // The string entry point applies the length guard on top of the checksum
    let text: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    assert_eq!(
        is_valid_card_number(&text),
        digits.len() >= MIN_CARD_DIGITS && checksum_ok,
        "length guard mismatch"
    );

    // Adding the check digit should make it valid
    if !digits.is_empty() {
        let check = luhn::generate_check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::validate(&with_check), "Adding check digit should make valid");
    }
});
