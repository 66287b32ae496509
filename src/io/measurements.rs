use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};

use crate::io::open_maybe_gz;
use crate::series::Measurement;

pub const DEFAULT_DATE_COLUMN: &str = "date";
pub const DEFAULT_VALUE_COLUMN: &str = "sum_mm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub date: String,
    pub value: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_COLUMN.to_string(),
            value: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}

/// Reads a headered CSV (plain or `.gz`) of visit dates and tumor burden.
///
/// Empty or non-numeric value cells are kept as missing values. A row whose
/// date cannot be parsed fails the whole read.
pub fn read_measurements(path: &Path, columns: &ColumnNames) -> Result<Vec<Measurement>> {
    let reader = open_maybe_gz(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .clone();
    let date_idx = column_index(&headers, &columns.date)?;
    let value_idx = column_index(&headers, &columns.value)?;

    let mut out = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        // header is line 1
        let line = i + 2;
        let record = record.with_context(|| format!("malformed CSV record at line {}", line))?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let raw_date = record.get(date_idx).unwrap_or("");
        let timestamp = parse_date(raw_date)
            .with_context(|| format!("invalid date '{}' at line {}", raw_date, line))?;
        let value = record.get(value_idx).and_then(parse_value);
        out.push(Measurement { timestamp, value });
    }

    Ok(out)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    match headers.iter().position(|h| h == name) {
        Some(idx) => Ok(idx),
        None => bail!(
            "column '{}' not found (available: {})",
            name,
            headers.iter().collect::<Vec<_>>().join(", ")
        ),
    }
}

/// Accepts `YYYY-MM-DD` and ISO-like date-times; the time of day is dropped.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("empty date");
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt.date());
        }
    }
    bail!("unrecognized date format");
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
