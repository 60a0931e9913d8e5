//! Report rendering and persistence.
//!
//! Supports the plain-text console report, JSON serialization, and CSV append.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::analyzers::types::Report;
use crate::error::{AnalyzerError, Result};

pub const NO_PRICE_DATA: &str = "no price data";

/// Formats minutes as `"<h> h <m> min"` using truncating division, so -90
/// becomes `"-1 h -30 min"`.
pub fn format_duration(minutes: i64) -> String {
    format!("{} h {} min", minutes / 60, minutes % 60)
}

/// Renders the human-readable report.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Minimum flight time between {} and {}:",
        report.origin, report.destination
    );
    for c in &report.carriers {
        let _ = writeln!(out, "Carrier {}: {}", c.carrier, format_duration(c.minutes));
    }
    out.push('\n');

    match &report.prices {
        Some(p) => {
            let _ = writeln!(
                out,
                "Difference between mean and median price: {:.2}",
                p.difference
            );
            let _ = writeln!(out, "Mean price: {:.2}", p.mean);
            let _ = writeln!(out, "Median price: {:.2}", p.median);
        }
        None => {
            let _ = writeln!(out, "{NO_PRICE_DATA}");
        }
    }
    out
}

/// Writes the text report to `writer`.
pub fn print_text(report: &Report, mut writer: impl Write) -> std::io::Result<()> {
    writer.write_all(render_text(report).as_bytes())?;
    writer.flush()
}

/// Serializes the report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[derive(Serialize)]
struct CarrierRecord<'a> {
    origin: &'a str,
    destination: &'a str,
    carrier: &'a str,
    min_minutes: i64,
    mean_price: Option<f64>,
    median_price: Option<f64>,
    price_difference: Option<f64>,
}

/// Appends one CSV row per carrier of `report`.
///
/// Creates the file if needed and writes headers while it is still empty.
pub fn append_record(path: &Path, report: &Report) -> Result<()> {
    let io_error = |source: std::io::Error| AnalyzerError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(io_error)?;
    let is_empty = file.metadata().map_err(io_error)?.len() == 0;
    debug!(
        path = %path.display(),
        is_empty,
        rows = report.carriers.len(),
        "Appending CSV records"
    );

    let mut writer = WriterBuilder::new()
        .has_headers(is_empty) // header only until the first row lands
        .from_writer(file);

    for c in &report.carriers {
        writer.serialize(CarrierRecord {
            origin: &report.origin,
            destination: &report.destination,
            carrier: &c.carrier,
            min_minutes: c.minutes,
            mean_price: report.prices.map(|p| p.mean),
            median_price: report.prices.map(|p| p.median),
            price_difference: report.prices.map(|p| p.difference),
        })?;
    }
    writer.flush().map_err(io_error)?;

    Ok(())
}
