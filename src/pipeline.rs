//! Load inputs, compare, and rank, in one pass

use crate::compare::{compare_against_collection, compare_all_pairs, ComparisonResult};
use crate::config::{CompareConfig, PriceListFormat};
use crate::error::Result;
use crate::io::{read_deck_dir, read_decklist, read_price_list};
use crate::report::sort_results;
use std::path::PathBuf;

/// Files a comparison run reads
#[derive(Debug, Clone)]
pub struct CompareInputs {
    pub price_file: PathBuf,
    pub deck_dir: PathBuf,
    /// Compare every deck against this collection instead of against each other
    pub collection: Option<PathBuf>,
}

/// Run a full comparison and return the results sorted ascending.
///
/// Everything is loaded before anything is compared, and the first load
/// failure aborts the run.
pub fn run_comparison(
    inputs: &CompareInputs,
    format: &PriceListFormat,
    config: &CompareConfig,
) -> Result<Vec<ComparisonResult>> {
    let prices = read_price_list(&inputs.price_file, format, config.default_price)?;
    let decks = read_deck_dir(&inputs.deck_dir, &prices)?;

    let mut results = match &inputs.collection {
        Some(path) => {
            let collection = read_decklist(path)?;
            log::info!(
                "Comparing {} decks against collection {} ({} mode)",
                decks.len(),
                path.display(),
                config.mode
            );
            compare_against_collection(&collection, &decks, config.mode, &prices)
        }
        None => {
            log::info!(
                "Comparing every pair of {} decks ({} mode)",
                decks.len(),
                config.mode
            );
            compare_all_pairs(&decks, config.mode, &prices)
        }
    };

    sort_results(&mut results);
    Ok(results)
}
