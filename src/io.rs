use crate::config::PriceListFormat;
use crate::decklist::{Deck, Decklist};
use crate::error::{Error, Result};
use crate::price_list::PriceList;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Load the card price CSV at `path`
pub fn read_price_list<P: AsRef<Path>>(
    path: P,
    format: &PriceListFormat,
    default_price: f64,
) -> Result<PriceList> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    PriceList::from_reader(
        BufReader::new(file),
        &path.display().to_string(),
        format,
        default_price,
    )
}

/// Load a single decklist file
pub fn read_decklist<P: AsRef<Path>>(path: P) -> Result<Decklist> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Decklist::from_reader(BufReader::new(file), &path.display().to_string())
}

/// Load every regular file in `dir` as a deck named after its file name,
/// valued once against `prices`.
///
/// Decks come back in lexical file-name order. The first malformed file
/// aborts the whole load.
pub fn read_deck_dir<P: AsRef<Path>>(dir: P, prices: &PriceList) -> Result<Vec<Deck>> {
    let dir = dir.as_ref();
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            log::debug!("Skipping {}, not a file", path.display());
            continue;
        }
        entries.push((entry.file_name().to_string_lossy().into_owned(), path));
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut decks = Vec::with_capacity(entries.len());
    for (name, path) in entries {
        let cards = read_decklist(&path)?;
        let deck = Deck::new(name, cards, prices);
        log::debug!(
            "Loaded deck {}: {} cards, {} distinct, worth {:.2}",
            deck.name,
            deck.cards.total_quantity(),
            deck.cards.len(),
            deck.value
        );
        decks.push(deck);
    }

    log::info!("Loaded {} decks from {}", decks.len(), dir.display());
    Ok(decks)
}
