//! Batch helpers for classifying many card numbers at once.
//!
//! Every call is independent of every other, so the parallel variants
//! (behind the `parallel` feature) return exactly what the sequential ones
//! do, in the same order.

use crate::card::{inspect, CardEntry};

/// Inspects every input, preserving order.
///
/// # Example
///
/// ```
/// use card_classifier::batch::inspect_all;
/// use card_classifier::BrandTag;
///
/// let entries = inspect_all(&["4111111111111111", "3782", "oops"]);
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[1].brand(), BrandTag::Amex);
/// assert!(!entries[2].is_valid());
/// ```
pub fn inspect_all<S: AsRef<str>>(cards: &[S]) -> Vec<CardEntry> {
    let entries: Vec<CardEntry> = cards.iter().map(|c| inspect(c.as_ref())).collect();
    tracing::debug!(total = entries.len(), "inspected batch");
    entries
}

/// Returns only the entries that pass validation, in input order.
pub fn valid_only<S: AsRef<str>>(cards: &[S]) -> Vec<CardEntry> {
    cards
        .iter()
        .map(|c| inspect(c.as_ref()))
        .filter(CardEntry::is_valid)
        .collect()
}

/// Counts valid and invalid card numbers.
///
/// Returns `(valid_count, invalid_count)`.
///
/// # Example
///
/// ```
/// use card_classifier::batch::count_valid;
///
/// let (valid, invalid) = count_valid(&["4111111111111111", "4111111111111112"]);
/// assert_eq!((valid, invalid), (1, 1));
/// ```
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards
        .iter()
        .filter(|c| crate::is_valid_card_number(c.as_ref()))
        .count();
    tracing::debug!(total = cards.len(), valid, "counted valid cards");
    (valid, cards.len() - valid)
}

/// Inspects every input in parallel using rayon, preserving order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn inspect_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> Vec<CardEntry> {
    use rayon::prelude::*;

    let entries: Vec<CardEntry> = cards.par_iter().map(|c| inspect(c.as_ref())).collect();
    tracing::debug!(total = entries.len(), "inspected batch in parallel");
    entries
}

/// Counts valid and invalid cards in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn count_valid_parallel<S: AsRef<str> + Sync>(cards: &[S]) -> (usize, usize) {
    use rayon::prelude::*;

    let valid = cards
        .par_iter()
        .filter(|c| crate::is_valid_card_number(c.as_ref()))
        .count();

    (valid, cards.len() - valid)
}
