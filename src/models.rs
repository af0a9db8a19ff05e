use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A country to query, paired with the region code the job search API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryEntry {
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code (e.g. `"DE"`).
    pub region_code: &'static str,
}

impl CountryEntry {
    pub const fn new(name: &'static str, region_code: &'static str) -> Self {
        Self { name, region_code }
    }
}

/// The countries queried on every run, in chart order.
pub const DEFAULT_COUNTRIES: [CountryEntry; 10] = [
    CountryEntry::new("United States", "US"),
    CountryEntry::new("United Kingdom", "GB"),
    CountryEntry::new("Germany", "DE"),
    CountryEntry::new("France", "FR"),
    CountryEntry::new("Netherlands", "NL"),
    CountryEntry::new("Sweden", "SE"),
    CountryEntry::new("Singapore", "SG"),
    CountryEntry::new("Australia", "AU"),
    CountryEntry::new("Canada", "CA"),
    CountryEntry::new("India", "IN"),
];

/// One row of the result table (one row = one country lookup).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRecord {
    pub country: String,
    pub count: u64,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, read-only sequence of records. Row order is the order of the country list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ResultTable {
    records: Vec<ResultRecord>,
}

impl ResultTable {
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    /// Country names in table order.
    pub fn countries(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.country.as_str()).collect()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.records.iter().map(|r| r.count).sum()
    }
}

impl From<Vec<ResultRecord>> for ResultTable {
    fn from(records: Vec<ResultRecord>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Body returned by `GET /jobSearch`. Only the paging block is of interest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobSearchResponse {
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl JobSearchResponse {
    /// Total number of matching postings; 0 when the API omits it.
    pub fn total(&self) -> u64 {
        self.paging.as_ref().and_then(|p| p.total).unwrap_or(0)
    }
}

/// Paging section of a search response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paging {
    /// Some responses encode counts as a string, others as a number.
    /// Accept both and normalize to `u64`.
    #[serde(default, deserialize_with = "de_opt_u64_from_string_or_number")]
    pub total: Option<u64>,
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Serde helper: parse an optional `u64` from a JSON number, a numeric string, or null.
fn de_opt_u64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct U64Visitor;

    impl<'de> Visitor<'de> for U64Visitor {
        type Value = Option<u64>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a non-negative count")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("negative value for count"));
            }
            Ok(Some(v as u64))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<u64>().map(Some).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_countries_are_unique_alpha2() {
        let mut codes: Vec<&str> = DEFAULT_COUNTRIES.iter().map(|c| c.region_code).collect();
        assert!(codes.iter().all(|c| c.len() == 2 && c.chars().all(|ch| ch.is_ascii_uppercase())));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), DEFAULT_COUNTRIES.len());
    }

    #[test]
    fn missing_paging_means_zero() {
        let r: JobSearchResponse = serde_json::from_str(r#"{"elements":[]}"#).unwrap();
        assert_eq!(r.total(), 0);
        let r: JobSearchResponse = serde_json::from_str(r#"{"paging":{"start":0}}"#).unwrap();
        assert_eq!(r.total(), 0);
    }
}
