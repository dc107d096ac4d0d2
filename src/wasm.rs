//! WebAssembly bindings for checkout form code.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { isValidCardNumber, detectBrand, formatForDisplay, inspectCard } from 'card_classifier';
//!
//! await init();
//!
//! input.addEventListener('input', (e) => {
//!     const brand = detectBrand(e.target.value);        // "visa", "amex", ... or ""
//!     e.target.value = formatForDisplay(e.target.value, brand);
//!     submit.disabled = !isValidCardNumber(e.target.value);
//! });
//!
//! const entry = inspectCard("3782 822463 10005");
//! console.log(entry.brand, entry.valid, entry.display, entry.masked);
//! ```
//!
//! None of these functions throw.

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::BrandTag;

/// Result of inspecting a card-number field, returned to JavaScript.
#[wasm_bindgen]
pub struct CardInfo {
    brand: String,
    valid: bool,
    display: String,
    masked: String,
}

#[wasm_bindgen]
impl CardInfo {
    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> String {
        self.brand.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.display.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn masked(&self) -> String {
        self.masked.clone()
    }
}

/// Checks the minimum length and Luhn checksum.
///
/// # Example
/// ```javascript
/// isValidCardNumber("4539 5787 6362 1486")  // true
/// ```
#[wasm_bindgen(js_name = isValidCardNumber)]
pub fn is_valid_card_number(raw_input: &str) -> bool {
    crate::is_valid_card_number(raw_input)
}

/// Detects the brand tag: "visa", "mastercard", "amex", "discover",
/// "jcb", "diners", or "" when unknown.
#[wasm_bindgen(js_name = detectBrand)]
pub fn detect_brand(raw_input: &str) -> String {
    crate::detect_brand(raw_input).tag().to_string()
}

/// Formats the input using the grouping of `brand`.
///
/// An unrecognized brand string is formatted like an unknown brand.
///
/// # Example
/// ```javascript
/// formatForDisplay("378282246310005", "amex")  // "3782 822463 10005"
/// ```
#[wasm_bindgen(js_name = formatForDisplay)]
pub fn format_for_display(raw_input: &str, brand: &str) -> String {
    let brand = brand.parse().unwrap_or(BrandTag::Unknown);
    crate::format_for_display(raw_input, brand)
}

/// Inspects a card-number field in one call.
#[wasm_bindgen(js_name = inspectCard)]
pub fn inspect_card(raw_input: &str) -> CardInfo {
    let entry = crate::inspect(raw_input);
    CardInfo {
        brand: entry.brand().tag().to_string(),
        valid: entry.is_valid(),
        display: entry.display(),
        masked: entry.masked(),
    }
}

/// Inspects an array of card-number strings. Non-string items are skipped.
#[wasm_bindgen(js_name = inspectBatch)]
pub fn inspect_batch(raw_inputs: js_sys::Array) -> js_sys::Array {
    let results = js_sys::Array::new();

    for item in raw_inputs.iter() {
        if let Some(raw) = item.as_string() {
            results.push(&JsValue::from(inspect_card(&raw)));
        }
    }

    results
}
