//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input and
//! always respect the brand's length limit.

#![no_main]

use card_classifier::{format, format_for_display, normalize, ALL_BRANDS};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = format::format_auto(data);
    let original_digits = normalize::strip_non_digits(data);

    for brand in ALL_BRANDS {
        let formatted = format_for_display(data, brand);
        assert!(formatted.len() <= brand.max_display_len(), "Display too long");

        // Formatting keeps a prefix of the digits
        let shown = normalize::strip_non_digits(&formatted);
        assert!(original_digits.starts_with(&shown), "Format should keep leading digits");

        let _ = format::format_with_separator(data, brand, "-");
        let _ = format::format_with_separator(data, brand, "");
        let _ = format::split_into_groups(data, brand);
    }
});
