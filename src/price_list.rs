//! Card price list loading and lookup

use crate::config::{PriceListFormat, DEFAULT_UNKNOWN_PRICE};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::io::Read;

/// Unit prices by exact card name
#[derive(Debug, Clone)]
pub struct PriceList {
    entries: HashMap<String, f64>,
    default_price: f64,
}

impl Default for PriceList {
    fn default() -> Self {
        Self::new(DEFAULT_UNKNOWN_PRICE)
    }
}

impl PriceList {
    /// Create an empty price list that prices every card at `default_price`
    pub fn new(default_price: f64) -> Self {
        Self {
            entries: HashMap::new(),
            default_price,
        }
    }

    /// Build a price list from `(name, price)` pairs. Later duplicates win.
    pub fn from_entries<I, S>(entries: I, default_price: f64) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, price)| (name.into(), price))
                .collect(),
            default_price,
        }
    }

    /// Parse a price list CSV. The first row is a header and is skipped.
    ///
    /// Card names are kept byte for byte, like decklist names; only the
    /// price field is trimmed. Any row with a missing column or a price
    /// that is not a finite, non-negative number aborts the whole load.
    pub fn from_reader<R: Read>(
        reader: R,
        origin: &str,
        format: &PriceListFormat,
        default_price: f64,
    ) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .delimiter(format.delimiter)
            .from_reader(reader);

        let mut entries = HashMap::new();

        for (index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| Error::csv(origin, e))?;
            // +2: one for the header, one for 1-based numbering
            let row = record
                .position()
                .map(|p| p.line())
                .unwrap_or(index as u64 + 2);

            let raw_price = record.get(format.price_column).ok_or_else(|| {
                Error::MalformedPriceRow {
                    row,
                    reason: format!("missing price column {}", format.price_column),
                }
            })?;
            let name = record.get(format.name_column).ok_or_else(|| {
                Error::MalformedPriceRow {
                    row,
                    reason: format!("missing name column {}", format.name_column),
                }
            })?;

            let price = parse_price(raw_price).ok_or_else(|| Error::MalformedPriceRow {
                row,
                reason: format!("invalid price {raw_price:?} for {name:?}"),
            })?;

            if entries.insert(name.to_string(), price).is_some() {
                log::debug!("Duplicate price entry for {name} on row {row}, keeping the later one");
            }
        }

        log::info!("Loaded {} card prices from {}", entries.len(), origin);

        Ok(Self {
            entries,
            default_price,
        })
    }

    /// Price of one copy of `card`, falling back to the default price
    pub fn price(&self, card: &str) -> f64 {
        match self.entries.get(card) {
            Some(price) => *price,
            None => {
                log::warn!("Can't find {card} in price list, using {:.2}", self.default_price);
                self.default_price
            }
        }
    }

    /// Look up a listed price without falling back
    pub fn get(&self, card: &str) -> Option<f64> {
        self.entries.get(card).copied()
    }

    pub fn default_price(&self) -> f64 {
        self.default_price
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}
