//! Run configuration shared by the library and the CLI

use std::fmt;

/// Price used for cards missing from the price list
pub const DEFAULT_UNKNOWN_PRICE: f64 = 0.25;

/// Decimals used when printing a shared value (matches `%f`)
pub const DEFAULT_VALUE_PRECISION: usize = 6;

/// What the intersection of two decks is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ComparisonMode {
    /// Number of cards the decks have in common
    Count,
    /// Price of the cards the decks have in common
    #[default]
    Value,
}

impl ComparisonMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Count => "count",
            ComparisonMode::Value => "value",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column layout of the price list CSV
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceListFormat {
    pub price_column: usize,
    pub name_column: usize,
    pub delimiter: u8,
}

impl Default for PriceListFormat {
    fn default() -> Self {
        Self {
            price_column: 0,
            name_column: 1,
            delimiter: b',',
        }
    }
}

/// Settings for a comparison run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareConfig {
    pub mode: ComparisonMode,
    pub default_price: f64,
    pub precision: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            mode: ComparisonMode::default(),
            default_price: DEFAULT_UNKNOWN_PRICE,
            precision: DEFAULT_VALUE_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behaviour() {
        let config = CompareConfig::default();
        assert_eq!(config.mode, ComparisonMode::Value);
        assert_eq!(config.default_price, 0.25);
        assert_eq!(config.precision, 6);

        let format = PriceListFormat::default();
        assert_eq!(format.price_column, 0);
        assert_eq!(format.name_column, 1);
        assert_eq!(format.delimiter, b',');
    }

    #[test]
    fn mode_display() {
        assert_eq!(ComparisonMode::Count.to_string(), "count");
        assert_eq!(ComparisonMode::Value.to_string(), "value");
    }
}
