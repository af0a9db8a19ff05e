//! Reporter: persist the collected table as chart + CSV and render a console summary.

use crate::config::{CHART_HEIGHT, CHART_WIDTH, OutputPaths};
use crate::models::ResultTable;
use crate::storage::{self, format_timestamp};
use crate::viz;
use anyhow::{Context, Result};

/// Write the chart and the CSV for `table`, replacing earlier files, and hand the table back.
///
/// Either write failing ends the run with an error.
pub fn report(table: ResultTable, paths: &OutputPaths) -> Result<ResultTable> {
    viz::plot_bars(&table, &paths.chart, CHART_WIDTH, CHART_HEIGHT)
        .with_context(|| format!("render chart {}", paths.chart.display()))?;
    log::info!("wrote chart to {}", paths.chart.display());

    storage::save_csv(&table, &paths.csv)
        .with_context(|| format!("write csv {}", paths.csv.display()))?;
    log::info!("saved {} rows to {}", table.len(), paths.csv.display());

    Ok(table)
}

/// Fixed-width text rendering of the table: header plus one line per record,
/// text columns left-aligned and counts right-aligned.
pub fn render_table(table: &ResultTable) -> String {
    let stamps: Vec<String> = table.iter().map(|r| format_timestamp(&r.timestamp)).collect();
    let counts: Vec<String> = table.iter().map(|r| r.count.to_string()).collect();

    let country_w = table.iter().map(|r| r.country.chars().count()).fold("country".len(), usize::max);
    let count_w = counts.iter().map(String::len).fold("count".len(), usize::max);
    let ts_w = stamps.iter().map(String::len).fold("timestamp".len(), usize::max);

    let mut out = format!("{:<country_w$}  {:>count_w$}  {:<ts_w$}\n", "country", "count", "timestamp");
    for ((r, count), ts) in table.iter().zip(&counts).zip(&stamps) {
        out.push_str(&format!("{:<country_w$}  {:>count_w$}  {:<ts_w$}\n", r.country, count, ts));
    }
    out
}
