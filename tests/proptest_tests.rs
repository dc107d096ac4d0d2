//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_classifier::{
    check, detect::detect_brand_digits, detect_brand, format, format_for_display, inspect,
    is_valid_card_number, luhn, normalize, BrandTag, ALL_BRANDS, MIN_CARD_DIGITS,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a length within range.
fn digit_string(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), range)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Interleaves separator noise between the characters of `card`.
fn with_noise(card: String) -> impl Strategy<Value = String> {
    let len = card.len();
    proptest::collection::vec(
        prop_oneof![Just(""), Just(" "), Just("-"), Just("  "), Just(" / "), Just("x")],
        len + 1,
    )
    .prop_map(move |seps| {
        let mut result = String::new();
        for (i, c) in card.chars().enumerate() {
            result.push_str(seps[i]);
            result.push(c);
        }
        result.push_str(seps[len]);
        result
    })
}

fn any_brand() -> impl Strategy<Value = BrandTag> {
    proptest::sample::select(ALL_BRANDS.to_vec())
}

/// Straightforward Luhn used as an oracle.
fn reference_luhn(digits: &str) -> bool {
    let sum: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                doubled / 10 + doubled % 10
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

// =============================================================================
// NORMALIZATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: normalizing twice equals normalizing once.
    #[test]
    fn normalization_is_idempotent(input in ".*") {
        let once = normalize(&input);
        let twice = normalize(&once.to_digit_string());
        prop_assert_eq!(once, twice);
    }

    /// Property: normalized output holds only digit values.
    #[test]
    fn normalization_keeps_only_digits(input in ".*") {
        let seq = normalize(&input);
        prop_assert!(seq.as_slice().iter().all(|&d| d <= 9));
        prop_assert_eq!(seq.len(), input.chars().filter(|c| c.is_ascii_digit()).count());
    }

    /// Property: separator noise never changes any derived value.
    #[test]
    fn noise_does_not_change_results(
        (card, noisy) in digit_string(0..=20).prop_flat_map(|card| {
            let noisy = with_noise(card.clone());
            (Just(card), noisy)
        })
    ) {
        prop_assert_eq!(is_valid_card_number(&card), is_valid_card_number(&noisy));
        prop_assert_eq!(detect_brand(&card), detect_brand(&noisy));
        let brand = detect_brand(&card);
        prop_assert_eq!(format_for_display(&card, brand), format_for_display(&noisy, brand));
    }
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    /// Property: fewer than 12 digits is never valid, whatever the content.
    #[test]
    fn short_input_is_never_valid(card in digit_string(0..=11), noise in "[a-z \\-]{0,8}") {
        let joined = format!("{}{}", noise, card);
        prop_assert!(!is_valid_card_number(&joined), "{:?} should not be valid", joined);
    }

    /// Property: validity equals the reference checksum once long enough.
    #[test]
    fn validity_matches_reference(card in digit_string(12..=30)) {
        prop_assert_eq!(is_valid_card_number(&card), reference_luhn(&card));
    }

    /// Property: adding a check digit makes any digit sequence valid.
    #[test]
    fn check_digit_makes_valid(prefix in digit_string(11..=18)) {
        let digits = normalize(&prefix);
        let check_digit = luhn::generate_check_digit(digits.as_slice());
        let full = format!("{}{}", prefix, check_digit);
        prop_assert!(is_valid_card_number(&full), "{} should be valid", full);
    }

    /// Property: changing any single digit invalidates a valid number.
    #[test]
    fn single_digit_change_invalidates(
        prefix in digit_string(15..=15),
        change_pos in 0usize..16,
        delta in 1u8..=9,
    ) {
        let digits = normalize(&prefix);
        let mut full: Vec<u8> = digits.as_slice().to_vec();
        full.push(luhn::generate_check_digit(&full));
        prop_assert!(luhn::validate(&full));

        full[change_pos] = (full[change_pos] + delta) % 10;
        prop_assert!(!luhn::validate(&full));
    }

    /// Property: all zeros of valid length passes (sum = 0).
    #[test]
    fn all_zeros_passes(len in MIN_CARD_DIGITS..=40usize) {
        prop_assert!(is_valid_card_number(&"0".repeat(len)));
    }

    /// Property: a run of nines is valid exactly when its length is a multiple of 10.
    #[test]
    fn long_nine_runs_follow_closed_form(len in 2_000usize..=20_000) {
        let nines = "9".repeat(len);
        prop_assert_eq!(is_valid_card_number(&nines), len % 10 == 0);
    }
}

// =============================================================================
// BRAND PROPERTIES
// =============================================================================

proptest! {
    /// Property: classification looks at the prefix only.
    #[test]
    fn brand_depends_on_prefix_only(card in digit_string(8..=19), tail in digit_string(0..=8)) {
        let extended = format!("{}{}", card, tail);
        prop_assert_eq!(detect_brand(&card), detect_brand(&extended));
    }

    /// Property: a leading 4 is always Visa.
    #[test]
    fn leading_four_is_visa(rest in digit_string(0..=18)) {
        prop_assert_eq!(detect_brand(&format!("4{}", rest)), BrandTag::Visa);
    }

    /// Property: Mastercard 2-series covers exactly 2221-2720.
    #[test]
    fn mastercard_2_series_range(prefix in 2000u32..=2999, rest in digit_string(0..=12)) {
        let card = format!("{}{}", prefix, rest);
        let expected = if (2221..=2720).contains(&prefix) {
            BrandTag::Mastercard
        } else {
            BrandTag::Unknown
        };
        prop_assert_eq!(detect_brand(&card), expected);
    }

    /// Property: Discover's 622 band covers exactly 622126-622925.
    #[test]
    fn discover_622_band_range(prefix in 622000u32..=622999, rest in digit_string(0..=10)) {
        let card = format!("{}{}", prefix, rest);
        let expected = if (622126..=622925).contains(&prefix) {
            BrandTag::Discover
        } else {
            BrandTag::Unknown
        };
        prop_assert_eq!(detect_brand(&card), expected);
    }

    /// Property: string and digit entry points agree.
    #[test]
    fn detect_agrees_with_digit_form(input in ".*") {
        let seq = normalize(&input);
        prop_assert_eq!(detect_brand(&input), detect_brand_digits(seq.as_slice()));
    }
}

// =============================================================================
// FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: formatting never exceeds the brand's maximum length.
    #[test]
    fn formatting_respects_max_length(card in digit_string(0..=40), brand in any_brand()) {
        let formatted = format_for_display(&card, brand);
        prop_assert!(formatted.len() <= brand.max_display_len(),
            "{:?} produced {:?}", brand, formatted);
    }

    /// Property: stripping a formatted string yields a prefix of the input.
    #[test]
    fn formatting_keeps_leading_digits(card in digit_string(0..=40), brand in any_brand()) {
        let formatted = format_for_display(&card, brand);
        let shown = normalize(&formatted).to_digit_string();
        let expected_len = card.len().min(brand.max_display_digits());
        prop_assert_eq!(shown, card[..expected_len].to_string());
    }

    /// Property: output is single-space separated with no padding.
    #[test]
    fn formatting_has_clean_spacing(card in digit_string(0..=20), brand in any_brand()) {
        let formatted = format_for_display(&card, brand);
        prop_assert!(!formatted.starts_with(' '));
        prop_assert!(!formatted.ends_with(' '));
        prop_assert!(!formatted.contains("  "));
    }

    /// Property: group sizes never exceed the brand's grouping.
    #[test]
    fn groups_follow_brand_layout(card in digit_string(1..=20), brand in any_brand()) {
        let groups = format::split_into_groups(&card, brand);
        for (group, &size) in groups.iter().zip(brand.group_sizes()) {
            prop_assert!(group.len() <= size);
        }
        prop_assert!(groups.len() <= brand.group_sizes().len());
        prop_assert_eq!(groups.join(" "), format_for_display(&card, brand));
    }
}

// =============================================================================
// TOTALITY
// =============================================================================

proptest! {
    /// Property: nothing panics on any input.
    #[test]
    fn entry_points_never_panic(input in ".*", brand in any_brand()) {
        let _ = is_valid_card_number(&input);
        let _ = detect_brand(&input);
        let _ = format_for_display(&input, brand);
        let _ = inspect(&input);
    }

    /// Property: check succeeds exactly when the validity flag is set.
    #[test]
    fn check_agrees_with_validity(input in "[0-9 \\-a-z]{0,24}") {
        prop_assert_eq!(check(&input).is_ok(), is_valid_card_number(&input));
        prop_assert_eq!(inspect(&input).is_valid(), is_valid_card_number(&input));
    }
}
