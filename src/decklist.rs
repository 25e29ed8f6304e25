//! Decklist parsing and valuation.
//!
//! A decklist file has one card per line in the form `<quantity> <card name>`.
//! Only the first space separates the quantity from the name, so names may
//! contain spaces. Blank lines are ignored.

use crate::error::{Error, Result};
use crate::price_list::PriceList;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Card name to owned quantity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decklist {
    cards: BTreeMap<String, u32>,
}

impl Decklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse decklist text. Errors name the origin `<input>`.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes(), "<input>")
    }

    /// Parse a decklist from any buffered reader.
    ///
    /// If a card name appears on more than one line, the later quantity
    /// replaces the earlier one instead of being added to it.
    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self> {
        let mut deck = Decklist::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| Error::io(origin, e))?;
            let line_number = index + 1;

            match parse_deck_line(&line) {
                Ok(Some((quantity, name))) => {
                    if let Some(previous) = deck.insert(name, quantity) {
                        log::debug!(
                            "{origin}:{line_number}: {name} listed again, quantity {previous} replaced by {quantity}"
                        );
                    }
                }
                Ok(None) => {}
                Err(reason) => {
                    return Err(Error::MalformedDeckLine {
                        origin: origin.to_string(),
                        line_number,
                        line: line.clone(),
                        reason,
                    });
                }
            }
        }

        Ok(deck)
    }

    /// Set the quantity of `name`, returning the quantity it replaced
    pub fn insert(&mut self, name: impl Into<String>, quantity: u32) -> Option<u32> {
        self.cards.insert(name.into(), quantity)
    }

    /// Quantity of `name`, if listed
    pub fn quantity(&self, name: &str) -> Option<u32> {
        self.cards.get(name).copied()
    }

    /// Number of distinct card names
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of all quantities, widened so large decks cannot overflow
    pub fn total_quantity(&self) -> u64 {
        self.cards.values().map(|quantity| u64::from(*quantity)).sum()
    }

    /// Quantity-weighted price of the whole list
    pub fn value(&self, prices: &PriceList) -> f64 {
        self.iter()
            .map(|(name, quantity)| f64::from(quantity) * prices.price(name))
            .sum()
    }

    /// Iterate cards in name order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.cards.iter(),
        }
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, quantity)| (name.as_str(), *quantity))
    }
}

impl<'a> IntoIterator for &'a Decklist {
    type Item = (&'a str, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Decklist {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut deck = Decklist::new();
        for (name, quantity) in iter {
            deck.insert(name, quantity);
        }
        deck
    }
}

/// A decklist with the name it was loaded under and its total value
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub name: String,
    pub cards: Decklist,
    /// Value against the price list the deck was loaded with
    pub value: f64,
}

impl Deck {
    /// Wrap `cards`, pricing them once against `prices`
    pub fn new(name: impl Into<String>, cards: Decklist, prices: &PriceList) -> Self {
        let value = cards.value(prices);
        Self {
            name: name.into(),
            cards,
            value,
        }
    }
}

/// Parse one decklist line.
///
/// Returns `Ok(None)` for blank lines and `Err(reason)` when the line is not
/// `<quantity> <card name>`. Trailing whitespace is dropped first.
pub fn parse_deck_line(line: &str) -> std::result::Result<Option<(u32, &str)>, String> {
    let line = line.trim_end();
    if line.trim_start().is_empty() {
        return Ok(None);
    }

    let (quantity, name) = line
        .split_once(' ')
        .ok_or_else(|| "expected `<quantity> <card name>`".to_string())?;

    let quantity = quantity
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity {quantity:?}: {e}"))?;

    Ok(Some((quantity, name)))
}

#[cfg(test)]
#[path = "decklist_tests.rs"]
mod tests;
