use deck_compare::convert::{convert_deckbox_to_dec, convert_deckbox_to_price_csv};
use deck_compare::error::Error;
use deck_compare::report::format_results;
use deck_compare::{
    read_decklist, read_price_list, run_comparison, CompareConfig, CompareInputs, ComparisonMode,
    Overlap, PriceListFormat,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Price list with only Bolt listed, three decks and a collection
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("prices.csv"), "price,name\n1.00,Bolt\n").unwrap();

        let decks = dir.path().join("decks");
        fs::create_dir(&decks).unwrap();
        fs::write(decks.join("a.dec"), "2 Bolt\n1 Fog\n").unwrap();
        fs::write(decks.join("b.dec"), "1 Bolt\n3 Fog\n").unwrap();
        fs::write(decks.join("c.dec"), "4 Island\n").unwrap();

        fs::write(dir.path().join("collection.dec"), "1 Bolt\n3 Fog\n4 Island\n").unwrap();

        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn inputs(&self, with_collection: bool) -> CompareInputs {
        CompareInputs {
            price_file: self.path().join("prices.csv"),
            deck_dir: self.path().join("decks"),
            collection: with_collection.then(|| self.path().join("collection.dec")),
        }
    }
}

fn config(mode: ComparisonMode) -> CompareConfig {
    CompareConfig {
        mode,
        ..CompareConfig::default()
    }
}

#[test]
fn all_pairs_count_mode() {
    let fixture = Fixture::new();

    let results = run_comparison(
        &fixture.inputs(false),
        &PriceListFormat::default(),
        &config(ComparisonMode::Count),
    )
    .unwrap();

    // a-c and b-c share nothing and keep their pair order; a-b share 2
    assert_eq!(
        format_results(&results, 6),
        "0 a.dec c.dec\n0 b.dec c.dec\n2 a.dec b.dec\n"
    );
}

#[test]
fn all_pairs_value_mode() {
    let fixture = Fixture::new();

    let results = run_comparison(
        &fixture.inputs(false),
        &PriceListFormat::default(),
        &config(ComparisonMode::Value),
    )
    .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[2].left, "a.dec");
    assert_eq!(results[2].right, "b.dec");
    assert_eq!(results[2].overlap, Overlap::Value(1.25));
    assert_eq!(
        format_results(&results[2..], 2),
        "1.25 a.dec b.dec\n"
    );
}

#[test]
fn collection_value_mode() {
    let fixture = Fixture::new();

    let results = run_comparison(
        &fixture.inputs(true),
        &PriceListFormat::default(),
        &config(ComparisonMode::Value),
    )
    .unwrap();

    // a: 1 Bolt + 1 Fog = 1.25 (deck worth 2.25)
    // b: 1 Bolt + 3 Fog = 1.75 (deck worth 1.75)
    // c: 4 Island = 1.00 (deck worth 1.00)
    assert_eq!(
        format_results(&results, 2),
        "1.00 - c.dec 1.00\n1.25 - a.dec 2.25\n1.75 - b.dec 1.75\n"
    );
}

#[test]
fn collection_count_mode() {
    let fixture = Fixture::new();

    let results = run_comparison(
        &fixture.inputs(true),
        &PriceListFormat::default(),
        &config(ComparisonMode::Count),
    )
    .unwrap();

    assert_eq!(
        format_results(&results, 6),
        "2 - a.dec\n4 - b.dec\n4 - c.dec\n"
    );
}

#[test]
fn default_price_is_configurable() {
    let fixture = Fixture::new();
    let config = CompareConfig {
        mode: ComparisonMode::Value,
        default_price: 0.0,
        precision: 2,
    };

    let results =
        run_comparison(&fixture.inputs(true), &PriceListFormat::default(), &config).unwrap();

    assert_eq!(
        format_results(&results, config.precision),
        "0.00 - c.dec 0.00\n1.00 - a.dec 2.00\n1.00 - b.dec 1.00\n"
    );
}

#[test]
fn malformed_deck_aborts_run() {
    let fixture = Fixture::new();
    fs::write(fixture.path().join("decks").join("d.dec"), "four Bolt\n").unwrap();

    let result = run_comparison(
        &fixture.inputs(false),
        &PriceListFormat::default(),
        &config(ComparisonMode::Count),
    );
    assert!(matches!(result, Err(Error::MalformedDeckLine { .. })));
}

#[test]
fn missing_collection_aborts_run() {
    let fixture = Fixture::new();
    let mut inputs = fixture.inputs(true);
    inputs.collection = Some(fixture.path().join("nope.dec"));

    let result = run_comparison(
        &inputs,
        &PriceListFormat::default(),
        &config(ComparisonMode::Value),
    );
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn deckbox_exports_feed_the_comparison() {
    let dir = TempDir::new().unwrap();
    let collection_csv = dir.path().join("collection.csv");
    let prices_csv = dir.path().join("prices.csv");
    fs::write(
        &collection_csv,
        "Count,Tradelist Count,Name\n4,0,Lightning Bolt\n2,0,Fog\n",
    )
    .unwrap();
    fs::write(
        &prices_csv,
        "Count,Name,Price\n4,Lightning Bolt,$1.50\n2,Fog,$0.10\n",
    )
    .unwrap();

    let dec_path = convert_deckbox_to_dec(&collection_csv).unwrap();
    assert_eq!(dec_path, dir.path().join("collection.csv.dec"));
    assert_eq!(
        fs::read_to_string(&dec_path).unwrap(),
        "4 Lightning Bolt\n2 Fog\n"
    );

    let rows = convert_deckbox_to_price_csv(&prices_csv).unwrap();
    assert_eq!(rows, 3);

    let deck = read_decklist(&dec_path).unwrap();
    let prices = read_price_list(&prices_csv, &PriceListFormat::default(), 0.25).unwrap();
    assert!((deck.value(&prices) - 6.2).abs() < 1e-9);
}

#[test]
fn deckbox_conversion_missing_file() {
    let result = convert_deckbox_to_dec("/this/file/does/not/exist.csv");
    assert!(matches!(result, Err(Error::Io { .. })));
}
