//! Synchronous client for the **LinkedIn Job Search API (v2)**.
//!
//! Only the `/jobSearch` endpoint is used, and only for its aggregate `paging.total`:
//! every request asks for a single listing (`count=1`).
//!
//! ### Notes
//! - The query keyword is fixed ([`SEARCH_KEYWORDS`]).
//! - There is no retry. A failed lookup is reported to the caller as a [`LookupError`]
//!   and the collector turns it into a count of 0.
//! - Network timeouts use a sane default (30s) and can be adjusted by editing the client builder.
//!
//! Typical usage:
//! ```no_run
//! # use jobcount_rs::{Client, Config};
//! # use jobcount_rs::api::CountLookup;
//! let client = Client::new(&Config::from_env())?;
//! let total = client.lookup("DE")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::Config;
use crate::models::JobSearchResponse;
use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, Request};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.linkedin.com/v2";

/// Keyword sent with every search.
pub const SEARCH_KEYWORDS: &str = "Innovation Manager";

const RESTLI_VERSION_HEADER: &str = "X-Restli-Protocol-Version";
const RESTLI_VERSION: &str = "2.0.0";

/// Any failure of a single per-country query.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request failed with HTTP {0}")]
    Status(StatusCode),
    #[error("decode json: {0}")]
    Decode(#[source] reqwest::Error),
    /// Raised by non-HTTP lookups (test stubs, alternative sources).
    #[error("{0}")]
    Other(String),
}

/// Capability to count matching postings for one region code.
pub trait CountLookup {
    fn lookup(&self, region_code: &str) -> Result<u64, LookupError>;
}

impl<F> CountLookup for F
where
    F: Fn(&str) -> Result<u64, LookupError>,
{
    fn lookup(&self, region_code: &str) -> Result<u64, LookupError> {
        self(region_code)
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    access_token: Option<String>,
    http: HttpClient,
}

impl Client {
    /// Client for the production endpoint, authenticated with the token in `config`.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(config: &Config, base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("jobcount_rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            access_token: config.access_token.clone(),
            http,
        })
    }

    /// Build (but do not send) the search request for one region code.
    pub fn build_request(&self, region_code: &str) -> reqwest::Result<Request> {
        let endpoint = format!("{}/jobSearch", self.base_url.trim_end_matches('/'));
        let mut req = self
            .http
            .get(endpoint)
            .query(&[
                ("keywords", SEARCH_KEYWORDS),
                ("locationCode", region_code),
                ("count", "1"),
            ])
            .header(RESTLI_VERSION_HEADER, RESTLI_VERSION)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &self.access_token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        req.build()
    }
}

impl CountLookup for Client {
    /// Total number of postings for `region_code`, or 0 when the response omits it.
    fn lookup(&self, region_code: &str) -> Result<u64, LookupError> {
        let req = self.build_request(region_code)?;
        let resp = self.http.execute(req)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        let body: JobSearchResponse = resp.json().map_err(LookupError::Decode)?;
        Ok(body.total())
    }
}
