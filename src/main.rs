//! Deck Compare - rank MTG decks by how much they share
//!
//! Compares every deck in a directory with every other deck, or with your
//! collection, by shared card count or shared value.

use clap::{Args, Parser, Subcommand};
use deck_compare::config::{DEFAULT_UNKNOWN_PRICE, DEFAULT_VALUE_PRECISION};
use deck_compare::convert::{convert_deckbox_to_dec, convert_deckbox_to_price_csv};
use deck_compare::report::write_report;
use deck_compare::{
    run_comparison, CompareConfig, CompareError, CompareInputs, ComparisonMode, PriceListFormat,
};
use std::io;
use std::path::PathBuf;

/// Compare MTG decklists by shared cards or shared value
#[derive(Parser, Debug)]
#[command(name = "deck_compare")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare decks and print the results, least shared first
    Compare(CompareArgs),
    /// Convert a Deckbox collection CSV to a .dec decklist (<input>.dec)
    DeckboxToDec {
        /// Deckbox CSV export
        input: PathBuf,
    },
    /// Rewrite a Deckbox price CSV in place as a price,name CSV
    DeckboxToPrices {
        /// Deckbox CSV export
        input: PathBuf,
    },
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Path to the card price CSV
    #[arg(long, default_value = "card_prices.csv")]
    price_file: PathBuf,

    /// Directory containing one decklist file per deck
    #[arg(long, default_value = "./decks/")]
    deck_dir: PathBuf,

    /// Your card collection in .dec format. Without it every pair of decks is compared.
    #[arg(long)]
    my_collection: Option<PathBuf>,

    /// Rank by shared card count or shared value
    #[arg(long, value_enum, default_value_t = ComparisonMode::Value)]
    mode: ComparisonMode,

    /// Price used for cards missing from the price list
    #[arg(long, default_value_t = DEFAULT_UNKNOWN_PRICE, value_parser = parse_price)]
    default_price: f64,

    /// Decimals printed for shared values
    #[arg(long, default_value_t = DEFAULT_VALUE_PRECISION)]
    precision: usize,

    /// Zero-based column holding the price
    #[arg(long, default_value_t = 0)]
    price_column: usize,

    /// Zero-based column holding the card name
    #[arg(long, default_value_t = 1)]
    name_column: usize,

    /// Field delimiter of the price CSV
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
}

fn parse_price(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(format!("`{s}` is not a non-negative price")),
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("`{s}` is not a single ASCII character")),
    }
}

fn main() {
    // Initialize logging. Set RUST_LOG to control the level, e.g. RUST_LOG=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Compare(args) => run_compare(args),
        Command::DeckboxToDec { input } => convert_deckbox_to_dec(&input).map(|out| {
            log::info!("Converted {} to {}", input.display(), out.display());
        }),
        Command::DeckboxToPrices { input } => convert_deckbox_to_price_csv(&input).map(|rows| {
            log::info!("Converted {} ({} rows)", input.display(), rows);
        }),
    };

    if let Err(e) = outcome {
        log::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_compare(args: CompareArgs) -> deck_compare::Result<()> {
    let inputs = CompareInputs {
        price_file: args.price_file,
        deck_dir: args.deck_dir,
        collection: args.my_collection,
    };
    let format = PriceListFormat {
        price_column: args.price_column,
        name_column: args.name_column,
        delimiter: args.delimiter,
    };
    let config = CompareConfig {
        mode: args.mode,
        default_price: args.default_price,
        precision: args.precision,
    };

    log::info!("Price file: {}", inputs.price_file.display());
    log::info!("Deck directory: {}", inputs.deck_dir.display());

    let mut results = run_comparison(&inputs, &format, &config)?;

    let stdout = io::stdout();
    match write_report(&mut stdout.lock(), &mut results, config.precision) {
        // Closed pipe (e.g. `| head`), nothing left to report to
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            return Err(CompareError::Io {
                path: PathBuf::from("<stdout>"),
                source: e,
            })
        }
        Ok(()) => {}
    }

    Ok(())
}
