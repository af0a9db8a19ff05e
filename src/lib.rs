//! jobcount_rs
//!
//! Counts "Innovation Manager" postings per country through the LinkedIn job search API,
//! then writes the counts to `results.csv` and a bar chart to `results.png`.
//! Pairs with the `jobcount` CLI.
//!
//! ### Pipeline
//! - [`collector::collect`] queries each country once, in list order; failed lookups
//!   are logged and recorded as 0
//! - [`report::report`] renders the chart and writes the CSV
//! - [`run`] chains the two
//!
//! ### Example
//! ```no_run
//! use jobcount_rs::{Client, Config, OutputPaths, DEFAULT_COUNTRIES};
//!
//! let client = Client::new(&Config::from_env())?;
//! let table = jobcount_rs::run(&DEFAULT_COUNTRIES, &client, &OutputPaths::default())?;
//! print!("{}", jobcount_rs::report::render_table(&table));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod collector;
pub mod config;
pub mod models;
pub mod report;
pub mod storage;
pub mod viz;

pub use api::{Client, CountLookup, LookupError};
pub use config::{Config, OutputPaths};
pub use models::{CountryEntry, DEFAULT_COUNTRIES, ResultRecord, ResultTable};

/// Collect one count per entry, then write chart and CSV. Runs exactly once.
pub fn run<L>(
    entries: &[CountryEntry],
    lookup: &L,
    paths: &OutputPaths,
) -> anyhow::Result<ResultTable>
where
    L: CountLookup + ?Sized,
{
    let table = collector::collect(entries, lookup);
    report::report(table, paths)
}
