//! Deck Compare - shared cards and shared value between MTG decklists
//!
//! Loads a card price CSV and a directory of decklists, measures how much
//! each pair of decks (or each deck and your collection) has in common, and
//! ranks the results.

pub mod compare;
pub mod config;
pub mod convert;
pub mod decklist;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod price_list;
pub mod report;

pub use compare::{
    compare_against_collection, compare_all_pairs, intersect, ComparisonResult, Overlap,
};
pub use config::{CompareConfig, ComparisonMode, PriceListFormat};
pub use decklist::{Deck, Decklist};
pub use error::{CompareError, Error, Result};
pub use io::{read_deck_dir, read_decklist, read_price_list};
pub use pipeline::{run_comparison, CompareInputs};
pub use price_list::PriceList;
pub use report::{format_results, sort_results, write_report};
