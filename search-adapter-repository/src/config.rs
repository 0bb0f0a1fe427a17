//! Configuration types for the SearchAdapter.

use search_adapter_shared::DEFAULT_MAX_RESULTS;

/// Configuration for the SearchAdapter.
#[derive(Debug, Clone)]
pub struct SearchAdapterConfig {
    /// Results returned when a search does not pass a limit.
    ///
    /// Defaults to 10. Explicit limits passed to `search` are never capped.
    pub default_max_results: usize,
}

impl Default for SearchAdapterConfig {
    fn default() -> Self {
        Self {
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchAdapterConfig {
    /// Create a config with a custom default result limit.
    ///
    /// # Arguments
    ///
    /// * `default_max_results` - Results returned when `search` is called without a limit
    pub fn with_max_results(default_max_results: usize) -> Self {
        Self {
            default_max_results,
        }
    }
}
