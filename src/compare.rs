//! Deck intersection and pairwise comparison

use crate::config::{ComparisonMode, DEFAULT_VALUE_PRECISION};
use crate::decklist::{Deck, Decklist};
use crate::price_list::PriceList;
use std::fmt;

/// Left identifier used when every deck is compared against the collection
pub const COLLECTION_PLACEHOLDER: &str = "-";

/// Size of the overlap between two decks
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlap {
    /// Cards in common
    Count(u64),
    /// Price of the cards in common
    Value(f64),
}

impl Overlap {
    /// Numeric value used for ranking
    pub fn as_f64(&self) -> f64 {
        match self {
            Overlap::Count(count) => *count as f64,
            Overlap::Value(value) => *value,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Overlap::Count(count) => *count == 0,
            Overlap::Value(value) => *value == 0.0,
        }
    }
}

impl fmt::Display for Overlap {
    /// Counts print as integers; values honour the formatter precision
    /// (`{:.2}`), defaulting to [`DEFAULT_VALUE_PRECISION`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overlap::Count(count) => write!(f, "{count}"),
            Overlap::Value(value) => {
                let precision = f.precision().unwrap_or(DEFAULT_VALUE_PRECISION);
                write!(f, "{value:.precision$}")
            }
        }
    }
}

/// One line of the final report
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub left: String,
    pub right: String,
    pub overlap: Overlap,
}

impl ComparisonResult {
    pub fn new(left: impl Into<String>, right: impl Into<String>, overlap: Overlap) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            overlap,
        }
    }
}

/// Overlap of two decklists.
///
/// For every card in `a` that `b` also lists, `min(qty_a, qty_b)` copies are
/// shared. In value mode each shared copy is weighted by its price.
pub fn intersect(a: &Decklist, b: &Decklist, mode: ComparisonMode, prices: &PriceList) -> Overlap {
    let shared = a
        .iter()
        .filter_map(|(name, qty_a)| b.quantity(name).map(|qty_b| (name, qty_a.min(qty_b))));

    match mode {
        ComparisonMode::Count => {
            Overlap::Count(shared.map(|(_, common)| u64::from(common)).sum())
        }
        ComparisonMode::Value => Overlap::Value(
            shared
                .map(|(name, common)| f64::from(common) * prices.price(name))
                .sum(),
        ),
    }
}

/// Compare every unordered pair of decks, in the order the decks are given.
///
/// Produces `n * (n - 1) / 2` results; deck `i` is always on the left of
/// deck `j` when `i < j`.
pub fn compare_all_pairs(
    decks: &[Deck],
    mode: ComparisonMode,
    prices: &PriceList,
) -> Vec<ComparisonResult> {
    let mut results = Vec::with_capacity(decks.len() * decks.len().saturating_sub(1) / 2);

    for (i, first) in decks.iter().enumerate() {
        for second in &decks[i + 1..] {
            let overlap = intersect(&first.cards, &second.cards, mode, prices);
            results.push(ComparisonResult::new(&first.name, &second.name, overlap));
        }
    }

    log::debug!("Compared {} deck pairs", results.len());
    results
}

/// Compare each deck against a fixed collection.
///
/// In value mode the right identifier is `"<deck name> <deck value>"` with
/// the deck's own value to two decimals.
pub fn compare_against_collection(
    collection: &Decklist,
    decks: &[Deck],
    mode: ComparisonMode,
    prices: &PriceList,
) -> Vec<ComparisonResult> {
    decks
        .iter()
        .map(|deck| {
            let overlap = intersect(&deck.cards, collection, mode, prices);
            let right = match mode {
                ComparisonMode::Count => deck.name.clone(),
                ComparisonMode::Value => format!("{} {:.2}", deck.name, deck.value),
            };
            ComparisonResult::new(COLLECTION_PLACEHOLDER, right, overlap)
        })
        .collect()
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
