//! Settings read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use search_adapter_repository::pagefind::{DEFAULT_BUNDLE_PATH, DEFAULT_REQUEST_TIMEOUT};
use search_adapter_shared::DEFAULT_MAX_RESULTS;
use tracing::warn;

use crate::errors::AppError;

/// Default site base URL (the local Hugo server).
const DEFAULT_BASE_URL: &str = "http://localhost:1313";

/// Default site language.
const DEFAULT_LANG: &str = "en";

/// Where the index library comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// Load the bundle served by the site.
    Live,
    /// Use records from a local JSON file.
    Mock,
}

impl SourceMode {
    /// Parse a source mode.
    ///
    /// Valid values: "live" or "mock" (case-insensitive).
    /// Defaults to "live" if not set or invalid.
    fn parse(value: Option<String>) -> Self {
        match value
            .unwrap_or_else(|| "live".to_string())
            .to_lowercase()
            .as_str()
        {
            "live" => Self::Live,
            "mock" => Self::Mock,
            other => {
                warn!(value = %other, "Invalid SEARCH_SOURCE, defaulting to 'live'");
                Self::Live
            }
        }
    }
}

/// Settings for the search adapter host.
#[derive(Debug, Clone)]
pub struct AdapterSettings {
    /// The site's base URL.
    pub base_url: String,
    /// The site's language tag.
    pub lang: String,
    /// Bundle path relative to the site root.
    pub bundle_path: String,
    /// Results returned when no limit is given.
    pub max_results: usize,
    /// Where the index library comes from.
    pub source: SourceMode,
    /// JSON file of term → records, required in mock mode.
    pub mock_file: Option<PathBuf>,
    /// Timeout for each bundle request.
    pub request_timeout: Duration,
}

impl AdapterSettings {
    /// Read settings from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SITE_BASE_URL`: Site base URL (default: http://localhost:1313)
    /// - `SITE_LANG`: Site language tag (default: en)
    /// - `SEARCH_BUNDLE_PATH`: Bundle path relative to the site root (default: /pagefind/)
    /// - `SEARCH_MAX_RESULTS`: Default result limit (default: 10)
    /// - `SEARCH_SOURCE`: "live" or "mock" (default: live)
    /// - `SEARCH_MOCK_FILE`: JSON file of term → records, required when `SEARCH_SOURCE=mock`
    /// - `SEARCH_HTTP_TIMEOUT_SECS`: Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("SITE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let lang = lookup("SITE_LANG").unwrap_or_else(|| DEFAULT_LANG.to_string());
        let bundle_path =
            lookup("SEARCH_BUNDLE_PATH").unwrap_or_else(|| DEFAULT_BUNDLE_PATH.to_string());

        let max_results = match lookup("SEARCH_MAX_RESULTS") {
            Some(value) => value.parse::<usize>().map_err(|e| {
                AppError::config(format!("SEARCH_MAX_RESULTS must be a number: {}", e))
            })?,
            None => DEFAULT_MAX_RESULTS,
        };
        if max_results == 0 {
            return Err(AppError::config("SEARCH_MAX_RESULTS must be positive"));
        }

        let request_timeout = lookup("SEARCH_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        let source = SourceMode::parse(lookup("SEARCH_SOURCE"));
        let mock_file = lookup("SEARCH_MOCK_FILE").map(PathBuf::from);
        if source == SourceMode::Mock && mock_file.is_none() {
            return Err(AppError::config(
                "SEARCH_MOCK_FILE is required when SEARCH_SOURCE=mock",
            ));
        }

        Ok(Self {
            base_url,
            lang,
            bundle_path,
            max_results,
            source,
            mock_file,
            request_timeout,
        })
    }
}
