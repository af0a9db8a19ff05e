use crate::models::{ResultRecord, ResultTable};
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order of the CSV export.
pub const CSV_HEADER: [&str; 3] = ["country", "count", "timestamp"];

/// Spreadsheet apps evaluate cells starting with these as formulas.
const FORMULA_STARTERS: [char; 4] = ['=', '+', '-', '@'];

fn guard_formula(cell: &str) -> String {
    if cell.starts_with(FORMULA_STARTERS) {
        format!("'{cell}")
    } else {
        cell.to_string()
    }
}

fn unguard_formula(cell: &str) -> &str {
    match cell.strip_prefix('\'') {
        Some(rest) if rest.starts_with(FORMULA_STARTERS) => rest,
        _ => cell,
    }
}

/// RFC 3339, UTC, microsecond precision (`2025-01-31T09:15:02.123456Z`).
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Save the table as CSV with header `country,count,timestamp`, replacing any existing file.
pub fn save_csv<P: AsRef<Path>>(table: &ResultTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.write_record(CSV_HEADER)?;
    for r in table {
        wtr.write_record([
            guard_formula(&r.country),
            r.count.to_string(),
            format_timestamp(&r.timestamp),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read a table written by [`save_csv`] back, preserving row order.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<ResultTable> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    if headers.iter().ne(CSV_HEADER) {
        anyhow::bail!(
            "unexpected header in {}: {:?}",
            path.display(),
            headers.iter().collect::<Vec<_>>()
        );
    }

    let mut out = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let line = i + 2;
        let country = unguard_formula(&row[0]).to_string();
        let count = row[1]
            .parse::<u64>()
            .with_context(|| format!("line {line}: bad count {:?}", &row[1]))?;
        let timestamp = DateTime::parse_from_rfc3339(&row[2])
            .with_context(|| format!("line {line}: bad timestamp {:?}", &row[2]))?
            .with_timezone(&Utc);
        out.push(ResultRecord {
            country,
            count,
            timestamp,
        });
    }
    Ok(ResultTable::from(out))
}

/// Save the table as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(table: &ResultTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(table)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
