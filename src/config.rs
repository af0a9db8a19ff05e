//! Run configuration: API credential and output locations.
//!
//! Only the binary touches the process environment; everything below it receives a
//! [`Config`] value so the pipeline can be exercised without mutating env vars.

use std::path::{Path, PathBuf};

/// Environment variable holding the bearer token for the job search API.
pub const TOKEN_ENV_VAR: &str = "LINKEDIN_ACCESS_TOKEN";

/// Default output file for the result table.
pub const DEFAULT_CSV_PATH: &str = "results.csv";
/// Default output file for the bar chart.
pub const DEFAULT_CHART_PATH: &str = "results.png";

/// Chart size in pixels (a 12x6 inch figure at 100 dpi).
pub const CHART_WIDTH: u32 = 1200;
pub const CHART_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Bearer token. `None` yields unauthenticated requests that the API rejects.
    pub access_token: Option<String>,
}

impl Config {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::from_token(Some(access_token.into()))
    }

    /// Read the credential from the process environment.
    pub fn from_env() -> Self {
        let cfg = Self::from_token(std::env::var(TOKEN_ENV_VAR).ok());
        if cfg.access_token.is_none() {
            log::warn!("{TOKEN_ENV_VAR} is not set; every lookup will fail and report 0");
        }
        cfg
    }

    /// Blank tokens are treated as absent.
    fn from_token(token: Option<String>) -> Self {
        let access_token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self { access_token }
    }
}

/// Where the reporter writes its two files. Both are overwritten on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: PathBuf,
    /// `.svg` renders SVG, anything else PNG.
    pub chart: PathBuf,
}

impl OutputPaths {
    /// Default file names placed inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            csv: dir.join(DEFAULT_CSV_PATH),
            chart: dir.join(DEFAULT_CHART_PATH),
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            csv: PathBuf::from(DEFAULT_CSV_PATH),
            chart: PathBuf::from(DEFAULT_CHART_PATH),
        }
    }
}
