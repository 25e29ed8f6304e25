//! Conversion of Deckbox CSV exports into the formats `compare` reads.
//!
//! Deckbox exports put the count in column 0, the card name in column 2 and,
//! for price exports, the name in column 1 and a `$`-prefixed price in
//! column 2. Rows with fewer than three fields are dropped.

use crate::error::{Error, Result};
use csv::StringRecord;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Raw price fields longer than this are replaced by [`FALLBACK_PRICE`]
const MAX_PRICE_FIELD_LEN: usize = 8;

/// Price written when the exported price field is unusable
pub const FALLBACK_PRICE: &str = "0.01";

const MIN_FIELDS: usize = 3;

/// Read every row of a Deckbox CSV, header included
pub fn read_deckbox_csv<R: Read>(reader: R, origin: &str) -> Result<Vec<StringRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| Error::csv(origin, e))?;
        if record.len() >= MIN_FIELDS {
            records.push(record);
        } else {
            log::debug!("Skipping short row in {origin}: {record:?}");
        }
    }
    Ok(records)
}

/// Decklist lines (`<count> <name>`) for every row after the header
pub fn to_dec_lines(records: &[StringRecord]) -> Vec<String> {
    records
        .iter()
        .skip(1)
        .map(|record| format!("{} {}", &record[0], &record[2]))
        .collect()
}

/// `(price, name)` rows. The header row is kept so the result is still a
/// CSV with a header.
pub fn to_price_rows(records: &[StringRecord]) -> Vec<(String, String)> {
    records
        .iter()
        .map(|record| {
            let raw_price = &record[2];
            let price = if raw_price.len() > MAX_PRICE_FIELD_LEN {
                FALLBACK_PRICE.to_string()
            } else {
                raw_price.replace('$', "")
            };
            (price, record[1].to_string())
        })
        .collect()
}

pub fn write_dec_lines<W: Write>(mut out: W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

pub fn write_price_rows<W: Write>(out: W, rows: &[(String, String)]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for (price, name) in rows {
        wtr.write_record([price, name])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `collection.csv` -> `collection.csv.dec`
pub fn dec_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".dec");
    PathBuf::from(name)
}

/// Convert a Deckbox collection export to a `.dec` file next to it.
/// Returns the path written.
pub fn convert_deckbox_to_dec<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let records = read_deckbox_csv(file, &path.display().to_string())?;
    let lines = to_dec_lines(&records);

    let out_path = dec_path_for(path);
    let out = File::create(&out_path).map_err(|e| Error::io(&out_path, e))?;
    write_dec_lines(BufWriter::new(out), &lines).map_err(|e| Error::io(&out_path, e))?;

    log::info!("Wrote {} cards to {}", lines.len(), out_path.display());
    Ok(out_path)
}

/// Rewrite a Deckbox price export in place as a `price,name` CSV.
/// Returns the number of rows written, header included.
pub fn convert_deckbox_to_price_csv<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let contents = fs::read(path).map_err(|e| Error::io(path, e))?;
    let records = read_deckbox_csv(contents.as_slice(), &origin)?;
    let rows = to_price_rows(&records);

    let out = File::create(path).map_err(|e| Error::io(path, e))?;
    write_price_rows(BufWriter::new(out), &rows).map_err(|e| Error::csv(&origin, e))?;

    log::info!("Wrote {} price rows to {}", rows.len(), origin);
    Ok(rows.len())
}
