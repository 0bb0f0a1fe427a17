//! Dependency initialization and wiring for the search adapter host.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use search_adapter_repository::pagefind::BundleConfig;
use search_adapter_repository::{IndexSource, SearchAdapter, SearchAdapterConfig};
use search_adapter_shared::HitRecord;
use tracing::info;

use crate::config::settings::{AdapterSettings, SourceMode};
use crate::errors::AppError;
use crate::host::ConsoleHost;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The adapter, shared with everything that searches.
    pub adapter: Arc<SearchAdapter>,
    /// The host the adapter signals.
    pub host: Arc<ConsoleHost>,
    /// The settings the dependencies were built from.
    pub settings: AdapterSettings,
}

impl Dependencies {
    /// Initialize all dependencies from settings.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Wired adapter and host; the adapter is not initialized yet
    /// * `Err(AppError)` - If the index source cannot be built
    pub async fn new(settings: AdapterSettings) -> Result<Self, AppError> {
        info!(
            base_url = %settings.base_url,
            lang = %settings.lang,
            bundle_path = %settings.bundle_path,
            source = ?settings.source,
            max_results = settings.max_results,
            "Initializing dependencies"
        );

        let source = match settings.source {
            SourceMode::Live => IndexSource::pagefind(BundleConfig::new(
                settings.bundle_path.clone(),
                settings.request_timeout,
            ))?,
            SourceMode::Mock => {
                let path = settings
                    .mock_file
                    .as_deref()
                    .ok_or_else(|| AppError::config("SEARCH_MOCK_FILE is not set"))?;
                IndexSource::mock(Self::read_mock_records(path).await?)
            }
        };

        let host = Arc::new(ConsoleHost::new());
        let adapter = Arc::new(SearchAdapter::with_config(
            source,
            host.clone(),
            SearchAdapterConfig::with_max_results(settings.max_results),
        ));

        Ok(Self {
            adapter,
            host,
            settings,
        })
    }

    /// Read a JSON object of term → records.
    async fn read_mock_records(path: &Path) -> Result<HashMap<String, Vec<HitRecord>>, AppError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let records: HashMap<String, Vec<HitRecord>> = serde_json::from_str(&raw)?;

        info!(
            path = %path.display(),
            terms = records.len(),
            "Loaded mock search records"
        );

        Ok(records)
    }
}
