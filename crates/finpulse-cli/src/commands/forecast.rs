//! Forecast command: load a dated expense history and project 7 days ahead
//!
//! The engine only sees an ordered amount series; fetching, parsing, and
//! chronological ordering of the history are this command's job.

use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use finpulse_core::{ForecastEngine, MIN_HISTORY};

/// Load `date,amount` rows from a CSV file and return the amounts in
/// chronological order (oldest first).
///
/// Column order is taken from the header row; dates are `YYYY-MM-DD`.
/// Amounts are taken as magnitudes since statement exports often sign
/// expenses negative.
pub fn load_history(path: &Path) -> Result<Vec<f64>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open history file {}", path.display()))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = rdr.headers().context("Failed to read CSV header")?;
    let date_col = find_column(headers, "date")?;
    let amount_col = find_column(headers, "amount")?;

    let mut rows: Vec<(NaiveDate, f64)> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV row {}", i + 2))?;

        let date_str = record
            .get(date_col)
            .with_context(|| format!("Row {} is missing a date", i + 2))?;
        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
            .with_context(|| format!("Row {}: invalid date '{}'", i + 2, date_str))?;

        let amount_str = record
            .get(amount_col)
            .with_context(|| format!("Row {} is missing an amount", i + 2))?;
        let amount: f64 = amount_str
            .trim()
            .parse()
            .with_context(|| format!("Row {}: invalid amount '{}'", i + 2, amount_str))?;

        rows.push((date, amount.abs()));
    }

    // Stable sort keeps same-day rows in file order
    rows.sort_by_key(|(date, _)| *date);
    debug!("Loaded {} history rows from {}", rows.len(), path.display());

    Ok(rows.into_iter().map(|(_, amount)| amount).collect())
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .with_context(|| format!("CSV header has no '{}' column", name))
}

pub fn cmd_forecast(file: &Path, json: bool) -> Result<()> {
    let history = load_history(file)?;

    if history.len() < MIN_HISTORY {
        bail!(
            "Not enough data in {}: need at least {} expense entries, got {}",
            file.display(),
            MIN_HISTORY,
            history.len()
        );
    }

    let forecast = ForecastEngine::new().forecast(&history)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    println!("📈 Forecast from {} history points:", history.len());
    for (i, amount) in forecast.next_7_days.iter().enumerate() {
        println!("   Day {}: ${:.2}", i + 1, amount);
    }
    let total: f64 = forecast.next_7_days.iter().sum();
    println!("   Total expected over 7 days: ${:.2}", total);

    Ok(())
}
