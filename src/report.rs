use crate::compare::ComparisonResult;
use std::io::{self, Write};

/// Sort results ascending by overlap. Equal overlaps keep their input order.
pub fn sort_results(results: &mut [ComparisonResult]) {
    results.sort_by(|a, b| a.overlap.as_f64().total_cmp(&b.overlap.as_f64()));
}

/// `<metric> <left> <right>`, values printed with `precision` decimals
pub fn format_result(result: &ComparisonResult, precision: usize) -> String {
    format!(
        "{:.precision$} {} {}",
        result.overlap,
        result.left,
        result.right,
        precision = precision
    )
}

/// Render already sorted results, one per line
pub fn format_results(results: &[ComparisonResult], precision: usize) -> String {
    let mut output = String::new();
    for result in results {
        output.push_str(&format_result(result, precision));
        output.push('\n');
    }
    output
}

/// Sort `results` and write them to `out`
pub fn write_report<W: Write>(
    out: &mut W,
    results: &mut [ComparisonResult],
    precision: usize,
) -> io::Result<()> {
    sort_results(results);
    for result in results.iter() {
        writeln!(out, "{}", format_result(result, precision))?;
    }
    out.flush()
}
