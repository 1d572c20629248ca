// src/report.rs
//! Aggregation and CSV output.
//!
//! Three files, each opened, written, and closed independently. The rows
//! of the per-country and per-constituency reports are sorted ascending
//! by signature count; the sort is stable, so ties keep upstream order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};
use crate::model::{Constituencies, Countries};

pub const SUMMARY_FILE: &str = "summary.csv";
pub const COUNTRIES_FILE: &str = "countries_agreeing_with_the_petition.csv";
pub const CONSTITUENCIES_FILE: &str = "constituencies_agreeing_with_the_petition.csv";

/// The three signature sums the summary report is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub scottish_constituencies: u64,
    pub ruk_constituencies: u64,
    pub rest_of_world: u64,
}

impl Tally {
    /// Sums signature counts per geographic bucket. Empty collections
    /// sum to 0.
    #[must_use]
    pub fn compute(countries: &Countries, constituencies: &Constituencies) -> Self {
        Self {
            scottish_constituencies: constituencies
                .in_scotland()
                .iter()
                .map(|c| c.signature_count)
                .sum(),
            ruk_constituencies: constituencies
                .in_rest_of_uk()
                .iter()
                .map(|c| c.signature_count)
                .sum(),
            rest_of_world: countries
                .rest_of_world()
                .iter()
                .map(|c| c.signature_count)
                .sum(),
        }
    }
}

/// Quotes a CSV field when it contains a comma, quote, or newline.
#[must_use]
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Writes `summary.csv`: one header row, one data row.
pub fn write_summary(dir: &Path, tally: &Tally) -> Result<PathBuf> {
    let mut out = String::new();
    out.push_str("Scottish constituencies signature count,");
    out.push_str("rUK constituencies signature count,");
    out.push_str("Rest of world signature count\n");
    out.push_str(&format!(
        "{},{},{}\n",
        tally.scottish_constituencies, tally.ruk_constituencies, tally.rest_of_world
    ));
    write_report(dir, SUMMARY_FILE, &out)
}

/// Writes the per-country report, UK included, ascending by count.
pub fn write_countries(dir: &Path, countries: &Countries) -> Result<PathBuf> {
    let mut rows: Vec<_> = countries.iter().collect();
    rows.sort_by_key(|c| c.signature_count);

    let mut out = String::from("country,#signatures\n");
    for country in rows {
        out.push_str(&format!(
            "{},{}\n",
            csv_field(&country.name),
            country.signature_count
        ));
    }
    write_report(dir, COUNTRIES_FILE, &out)
}

/// Writes the per-constituency report, Scottish seats included,
/// ascending by count.
pub fn write_constituencies(dir: &Path, constituencies: &Constituencies) -> Result<PathBuf> {
    let mut rows: Vec<_> = constituencies.iter().collect();
    rows.sort_by_key(|c| c.signature_count);

    let mut out = String::from("constituency,#signatures\n");
    for constituency in rows {
        out.push_str(&format!(
            "{},{}\n",
            csv_field(&constituency.name),
            constituency.signature_count
        ));
    }
    write_report(dir, CONSTITUENCIES_FILE, &out)
}

/// Writes all three reports, returning their paths in write order.
pub fn write_all(
    dir: &Path,
    tally: &Tally,
    countries: &Countries,
    constituencies: &Constituencies,
) -> Result<Vec<PathBuf>> {
    Ok(vec![
        write_summary(dir, tally)?,
        write_countries(dir, countries)?,
        write_constituencies(dir, constituencies)?,
    ])
}

fn write_report(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|source| ReportError::Io {
        source,
        path: path.clone(),
    })?;
    Ok(path)
}
