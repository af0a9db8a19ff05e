use crate::api::CountLookup;
use crate::models::{CountryEntry, ResultRecord, ResultTable};
use chrono::Utc;

/// Query every entry once, in order, and tabulate the counts.
///
/// A failed lookup is logged and recorded as a count of 0; the run always moves on to the
/// next country. The output has exactly one record per entry, in entry order, each stamped
/// when its own lookup finished.
///
/// Note that a stored 0 does not distinguish "no postings" from "query failed"; the log is
/// the only place where the two differ.
pub fn collect<L>(entries: &[CountryEntry], lookup: &L) -> ResultTable
where
    L: CountLookup + ?Sized,
{
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let count = match lookup.lookup(entry.region_code) {
            Ok(n) => {
                log::debug!("{} ({}): {} postings", entry.name, entry.region_code, n);
                n
            }
            Err(e) => {
                log::warn!(
                    "error searching jobs for {} ({}): {}",
                    entry.name,
                    entry.region_code,
                    e
                );
                0
            }
        };
        records.push(ResultRecord {
            country: entry.name.to_string(),
            count,
            timestamp: Utc::now(),
        });
    }
    ResultTable::from(records)
}
