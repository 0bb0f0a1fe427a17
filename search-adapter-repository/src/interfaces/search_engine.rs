//! The capability exposed to the host.

use async_trait::async_trait;
use search_adapter_shared::NormalizedResult;

use crate::types::AdapterStatus;

/// The uniform `{init, search}` capability a host UI talks to, regardless of
/// which index library is installed.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Load the index library and unblock the host.
    ///
    /// `base_url` and `lang` are accepted for locale-aware hosts. The host is
    /// always signalled ready, even when loading fails.
    async fn init(&self, base_url: &str, lang: &str) -> AdapterStatus;

    /// Search the index.
    ///
    /// Returns at most `max_results` results (10 when `None`). Never fails:
    /// an empty vector means either no matches or an internal failure.
    async fn search(&self, term: Option<&str>, max_results: Option<usize>)
        -> Vec<NormalizedResult>;
}
