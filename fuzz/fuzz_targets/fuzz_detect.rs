//! Fuzz target for brand detection and card inspection.
//!
//! Tests that classification never panics and that every entry point
//! agrees with the composite `inspect` view.

#![no_main]

use card_classifier::{
    check, detect::detect_brand_digits, detect_brand, format_for_display, inspect,
    is_valid_card_number, normalize,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let brand = detect_brand(data);
    assert_eq!(brand, detect_brand_digits(normalize(data).as_slice()));

    let entry = inspect(data);
    assert_eq!(entry.brand(), brand);
    assert_eq!(entry.is_valid(), is_valid_card_number(data));
    assert_eq!(entry.display(), format_for_display(data, brand));
    assert_eq!(check(data).is_ok(), entry.is_valid());

    // Masked forms never contain the full number
    let digits = normalize(data).to_digit_string();
    if digits.len() > 4 {
        assert!(!entry.masked().contains(&digits));
        assert!(!format!("{:?}", entry).contains(&digits));
    }
});
