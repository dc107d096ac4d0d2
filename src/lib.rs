//! # card_classifier
//!
//! Payment card number helpers for checkout forms.
//!
//! ## Features
//!
//! - Luhn checksum validation with a 12-digit minimum
//! - Card brand detection by prefix (Visa, Mastercard, Amex, Discover, JCB, Diners Club)
//! - Brand-aware display formatting for partially typed numbers
//! - Masked `Debug`/`Display`, zeroized digit buffers
//! - Library, CLI and WASM interfaces
//!
//! Every entry point is total: malformed or half-typed input yields `false`,
//! `BrandTag::Unknown` or a partial string, never an error or a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use card_classifier::{detect_brand, format_for_display, is_valid_card_number, BrandTag};
//!
//! assert!(is_valid_card_number("4539 5787 6362 1486"));
//! assert!(!is_valid_card_number("4539 5787"));
//!
//! assert_eq!(detect_brand("5500000000000004"), BrandTag::Mastercard);
//! assert_eq!(detect_brand("0000000000000000"), BrandTag::Unknown);
//!
//! assert_eq!(format_for_display("378282246310005", BrandTag::Amex), "3782 822463 10005");
//! assert_eq!(format_for_display("4111111111111111", BrandTag::Visa), "4111 1111 1111 1111");
//! ```
//!
//! ## One-shot inspection
//!
//! ```rust
//! use card_classifier::{inspect, BrandTag};
//!
//! let entry = inspect("6011-0000-0000-0004");
//! assert_eq!(entry.brand(), BrandTag::Discover);
//! assert!(entry.is_valid());
//! assert_eq!(entry.display(), "6011 0000 0000 0004");
//!
//! // Safe for logging - never exposes the full number
//! assert_eq!(entry.to_string(), "Discover ****-****-****-0004");
//! ```
//!
//! ## Supported Card Brands
//!
//! Prefixes are tested top to bottom; the first match wins.
//!
//! | Brand | Tag | Prefix | Display |
//! |-------|-----|--------|---------|
//! | Visa | `visa` | 4 | 4-4-4-4 |
//! | Mastercard | `mastercard` | 51-55, 2221-2720 | 4-4-4-4 |
//! | American Express | `amex` | 34, 37 | 4-6-5 |
//! | Discover | `discover` | 6011, 65, 644-649, 622126-622925 | 4-4-4-4 |
//! | JCB | `jcb` | 35 | 4-4-4-4 |
//! | Diners Club | `diners` | 300-305, 36, 38 | 4-4-4-4 |
//! | Unknown | `""` | anything else | 4-4-4-4 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for `BrandTag` |
//! | `parallel` | Rayon-based batch helpers |
//! | `cli` | `cardcheck` command-line tool |
//! | `wasm` | WebAssembly bindings |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod brand;
pub mod card;
pub mod detect;
pub mod error;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod normalize;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use brand::{BrandTag, ALL_BRANDS};
pub use card::{check, inspect, CardEntry};
pub use detect::detect_brand;
pub use error::{ParseBrandError, ValidationError};
pub use format::format_for_display;
pub use luhn::{is_valid_card_number, MIN_CARD_DIGITS};
pub use normalize::{normalize, DigitSequence};
