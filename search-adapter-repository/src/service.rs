//! Search adapter service implementation.
//!
//! This module provides the adapter a host UI talks to. It loads the index
//! library once, forwards queries to it and reshapes its records into
//! [`NormalizedResult`] values.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::try_join_all;
use search_adapter_shared::{HitRecord, NormalizedResult, PageSummary, SearchQuery};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::config::SearchAdapterConfig;
use crate::errors::SearchAdapterError;
use crate::interfaces::{IndexLibrary, SearchEngine, SearchHost};
use crate::markup::strip_mark_tags;
use crate::source::IndexSource;
use crate::types::AdapterStatus;

/// Logged when the index library cannot be loaded.
const REMEDIATION_HINT: &str =
    "Search index not available. Run: hugo && npx pagefind --site public";

/// Internal lifecycle state; the library handle lives in `Ready`.
enum AdapterState {
    Uninitialized,
    Loading,
    Ready(Arc<dyn IndexLibrary>),
    FailedButReady,
}

impl AdapterState {
    fn status(&self) -> AdapterStatus {
        match self {
            Self::Uninitialized => AdapterStatus::Uninitialized,
            Self::Loading => AdapterStatus::Loading,
            Self::Ready(_) => AdapterStatus::Ready,
            Self::FailedButReady => AdapterStatus::FailedButReady,
        }
    }
}

/// The adapter between a host UI and an index library.
///
/// Construct one per process and share it by `Arc` with everything that needs
/// search. `initialize` loads the library once; `search` never fails and
/// returns an empty vector for both "no matches" and "something went wrong".
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use search_adapter_repository::{IndexSource, SearchAdapter, SearchHost};
/// use search_adapter_repository::pagefind::BundleConfig;
///
/// struct Host;
///
/// impl SearchHost for Host {
///     fn set_search_engine_ready(&self, _ready: bool) {}
///     fn execute_initial_search(&self) {}
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let source = IndexSource::pagefind(BundleConfig::default())?;
/// let adapter = SearchAdapter::new(source, Arc::new(Host));
///
/// adapter.initialize("http://localhost:1313", "en").await;
/// let results = adapter.search(Some("install"), None).await;
/// # Ok(())
/// # }
/// ```
pub struct SearchAdapter {
    source: IndexSource,
    host: Arc<dyn SearchHost>,
    config: SearchAdapterConfig,
    state: RwLock<AdapterState>,
}

impl SearchAdapter {
    /// Create a new SearchAdapter with default configuration.
    ///
    /// # Arguments
    ///
    /// * `source` - Where the index library comes from
    /// * `host` - The host UI controller to signal once initialized
    pub fn new(source: IndexSource, host: Arc<dyn SearchHost>) -> Self {
        Self::with_config(source, host, SearchAdapterConfig::default())
    }

    /// Create a new SearchAdapter with custom configuration.
    pub fn with_config(
        source: IndexSource,
        host: Arc<dyn SearchHost>,
        config: SearchAdapterConfig,
    ) -> Self {
        Self {
            source,
            host,
            config,
            state: RwLock::new(AdapterState::Uninitialized),
        }
    }

    /// Current lifecycle status.
    pub async fn status(&self) -> AdapterStatus {
        self.state.read().await.status()
    }

    /// Load the index library and unblock the host.
    ///
    /// Reuses a pre-loaded library when the source has one, otherwise loads it
    /// once. Whatever the outcome, the host's ready flag is set and its
    /// pending search is triggered, exactly once per adapter.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The site's base URL
    /// * `lang` - The site's language tag
    ///
    /// # Returns
    ///
    /// The status after this call. Calls after the first do not load again and
    /// do not signal the host; they just report the current status.
    pub async fn initialize(&self, base_url: &str, lang: &str) -> AdapterStatus {
        {
            let mut state = self.state.write().await;
            if !matches!(*state, AdapterState::Uninitialized) {
                let status = state.status();
                debug!(status = ?status, "Search adapter already initialized");
                return status;
            }
            *state = AdapterState::Loading;
        }

        let next = match self.source.resolve(base_url, lang).await {
            Ok(library) => {
                info!(base_url = %base_url, lang = %lang, "Search index library initialized");
                AdapterState::Ready(library)
            }
            Err(e) => {
                warn!(base_url = %base_url, "{}", REMEDIATION_HINT);
                error!(error = %e, "Failed to load search index library");
                AdapterState::FailedButReady
            }
        };

        let status = next.status();
        *self.state.write().await = next;

        self.host.set_search_engine_ready(true);
        self.host.execute_initial_search();

        status
    }

    /// Search the index, collapsing every failure into an empty result.
    ///
    /// # Arguments
    ///
    /// * `term` - The query text; `None` or empty returns no results
    /// * `max_results` - Result cap, the configured default when `None`
    pub async fn search(
        &self,
        term: Option<&str>,
        max_results: Option<usize>,
    ) -> Vec<NormalizedResult> {
        let query = SearchQuery {
            term: term.map(str::to_string),
            max_results: max_results.unwrap_or(self.config.default_max_results),
        };
        self.search_query(&query).await
    }

    /// Run a [`SearchQuery`], collapsing every failure into an empty result.
    pub async fn search_query(&self, query: &SearchQuery) -> Vec<NormalizedResult> {
        match self.try_search(query).await {
            Ok(results) => results,
            Err(SearchAdapterError::NotLoaded) => {
                debug!("Search requested before the index library was loaded");
                Vec::new()
            }
            Err(e) => {
                error!(error = %e, "Search error");
                Vec::new()
            }
        }
    }

    /// Run a [`SearchQuery`] and report failures.
    ///
    /// An absent or empty term returns `Ok` with no results without touching
    /// the library. Otherwise at most `max_results` hits are resolved
    /// concurrently; if any of them fails, the whole search fails.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<NormalizedResult>)` - Results in the library's order
    /// * `Err(SearchAdapterError::NotLoaded)` - If no library is loaded
    /// * `Err(SearchAdapterError)` - If the query or any hit failed
    #[instrument(skip(self, query), fields(term = ?query.term(), max_results = query.max_results))]
    pub async fn try_search(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<NormalizedResult>, SearchAdapterError> {
        let Some(term) = query.term() else {
            return Ok(Vec::new());
        };

        let library = match &*self.state.read().await {
            AdapterState::Ready(library) => Arc::clone(library),
            _ => return Err(SearchAdapterError::NotLoaded),
        };

        let response = library.search(term).await?;
        let total_hits = response.len();

        let records = try_join_all(
            response
                .results
                .into_iter()
                .take(query.max_results)
                .map(|hit| async move { hit.data().await }),
        )
        .await?;

        let matches = query.matches();
        let results = records
            .into_iter()
            .map(|record| Self::normalize(record, &matches))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            total_hits = total_hits,
            returned = results.len(),
            "Search completed"
        );

        Ok(results)
    }

    /// Map a hit record into the host's result shape.
    fn normalize(
        record: HitRecord,
        matches: &[String],
    ) -> Result<NormalizedResult, SearchAdapterError> {
        if record.url.is_empty() {
            return Err(SearchAdapterError::invalid_record("url is required"));
        }

        let page = PageSummary {
            title: strip_mark_tags(record.title()),
            content: strip_mark_tags(record.body()),
            tags: record.tags(),
            breadcrumb: String::new(),
            uri: record.url,
        };

        Ok(NormalizedResult::new(page, matches.to_vec()))
    }
}

#[async_trait]
impl SearchEngine for SearchAdapter {
    async fn init(&self, base_url: &str, lang: &str) -> AdapterStatus {
        self.initialize(base_url, lang).await
    }

    async fn search(
        &self,
        term: Option<&str>,
        max_results: Option<usize>,
    ) -> Vec<NormalizedResult> {
        SearchAdapter::search(self, term, max_results).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::LibraryLoader;
    use crate::mock::MockIndexLibrary;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Host that records the signals it receives.
    #[derive(Default)]
    struct RecordingHost {
        ready: AtomicBool,
        initial_searches: AtomicUsize,
    }

    impl SearchHost for RecordingHost {
        fn set_search_engine_ready(&self, ready: bool) {
            self.ready.store(ready, Ordering::SeqCst);
        }

        fn execute_initial_search(&self) {
            self.initial_searches.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FailingLoader;

    #[async_trait]
    impl LibraryLoader for FailingLoader {
        async fn load(
            &self,
            _base_url: &str,
            _lang: &str,
        ) -> Result<Arc<dyn IndexLibrary>, SearchAdapterError> {
            Err(SearchAdapterError::load("bundle not found"))
        }
    }

    fn records(count: usize) -> Vec<HitRecord> {
        (0..count)
            .map(|i| HitRecord::new(format!("/page-{}/", i)).with_title(format!("Page {}", i)))
            .collect()
    }

    async fn ready_adapter(
        library: Arc<MockIndexLibrary>,
    ) -> (SearchAdapter, Arc<RecordingHost>) {
        let host = Arc::new(RecordingHost::default());
        let adapter = SearchAdapter::new(IndexSource::preloaded(library), host.clone());
        adapter.initialize("http://localhost:1313", "en").await;
        (adapter, host)
    }

    #[tokio::test]
    async fn test_init_with_preloaded_library() {
        let library = Arc::new(MockIndexLibrary::new());
        let (adapter, host) = ready_adapter(library).await;

        assert_eq!(adapter.status().await, AdapterStatus::Ready);
        assert!(host.ready.load(Ordering::SeqCst));
        assert_eq!(host.initial_searches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_init_failure_still_signals_host() {
        let host = Arc::new(RecordingHost::default());
        let adapter =
            SearchAdapter::new(IndexSource::loader(Box::new(FailingLoader)), host.clone());

        let status = adapter.initialize("http://localhost:1313", "en").await;

        assert_eq!(status, AdapterStatus::FailedButReady);
        assert!(host.ready.load(Ordering::SeqCst));
        assert_eq!(host.initial_searches.load(Ordering::SeqCst), 1);
        assert!(adapter.search(Some("hugo"), None).await.is_empty());
    }

    #[tokio::test]
    async fn test_second_init_does_not_resignal() {
        let library = Arc::new(MockIndexLibrary::new());
        let (adapter, host) = ready_adapter(library).await;

        let status = adapter.initialize("http://localhost:1313", "en").await;

        assert_eq!(status, AdapterStatus::Ready);
        assert_eq!(host.initial_searches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_search_before_init_is_empty() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("hugo", records(3));
        let adapter = SearchAdapter::new(
            IndexSource::preloaded(library.clone()),
            Arc::new(RecordingHost::default()),
        );

        assert!(adapter.search(Some("hugo"), None).await.is_empty());
        assert!(matches!(
            adapter.try_search(&SearchQuery::new("hugo")).await,
            Err(SearchAdapterError::NotLoaded)
        ));
        assert_eq!(library.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_or_missing_term_skips_library() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("", records(3));
        let (adapter, _host) = ready_adapter(library.clone()).await;

        assert!(adapter.search(Some(""), None).await.is_empty());
        assert!(adapter.search(None, Some(5)).await.is_empty());
        assert_eq!(library.search_calls(), 0);
    }

    #[tokio::test]
    async fn test_results_capped_at_max_results() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("page", records(15));
        let (adapter, _host) = ready_adapter(library.clone()).await;

        assert_eq!(adapter.search(Some("page"), None).await.len(), 10);
        assert_eq!(adapter.search(Some("page"), Some(3)).await.len(), 3);
        assert_eq!(adapter.search(Some("page"), Some(50)).await.len(), 15);
        assert!(adapter.search(Some("page"), Some(0)).await.is_empty());
    }

    #[tokio::test]
    async fn test_only_kept_hits_are_resolved() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("page", records(8));
        let (adapter, _host) = ready_adapter(library.clone()).await;

        adapter.search(Some("page"), Some(2)).await;

        assert_eq!(library.data_calls(), 2);
    }

    #[tokio::test]
    async fn test_results_keep_library_order() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("page", records(4));
        let (adapter, _host) = ready_adapter(library).await;

        let uris: Vec<String> = adapter
            .search(Some("page"), None)
            .await
            .into_iter()
            .map(|r| r.page.uri)
            .collect();

        assert_eq!(uris, vec!["/page-0/", "/page-1/", "/page-2/", "/page-3/"]);
    }

    #[tokio::test]
    async fn test_normalized_shape() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results(
            "  red   fox ",
            vec![HitRecord::new("/animals/fox/")
                .with_title("The <mark>red</mark> fox")
                .with_tags(vec!["animals".to_string()])
                .with_excerpt("<mark>Fox</mark>es are <b>quick</b>")],
        );
        let (adapter, _host) = ready_adapter(library).await;

        let results = adapter.search(Some("  red   fox "), None).await;

        assert_eq!(
            results,
            vec![NormalizedResult::new(
                PageSummary {
                    uri: "/animals/fox/".to_string(),
                    title: "The red fox".to_string(),
                    breadcrumb: String::new(),
                    content: "Foxes are <b>quick</b>".to_string(),
                    tags: vec!["animals".to_string()],
                },
                vec!["red".to_string(), "fox".to_string()],
            )]
        );
    }

    #[tokio::test]
    async fn test_missing_fields_use_defaults() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("bare", vec![HitRecord::new("/bare/").with_content("text")]);
        let (adapter, _host) = ready_adapter(library).await;

        let results = adapter.search(Some("bare"), None).await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].page.title, "");
        assert_eq!(results[0].page.content, "text");
        assert!(results[0].page.tags.is_empty());
        assert_eq!(results[0].page.breadcrumb, "");
    }

    #[tokio::test]
    async fn test_failing_hit_empties_whole_result() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("page", records(3));
        library.register_failing_hit("page", "fragment missing");
        let (adapter, _host) = ready_adapter(library).await;

        assert!(adapter.search(Some("page"), None).await.is_empty());
        assert!(matches!(
            adapter.try_search(&SearchQuery::new("page")).await,
            Err(SearchAdapterError::HitFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_failing_hit_beyond_limit_is_ignored() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("page", records(3));
        library.register_failing_hit("page", "fragment missing");
        let (adapter, _host) = ready_adapter(library).await;

        assert_eq!(adapter.search(Some("page"), Some(3)).await.len(), 3);
    }

    #[tokio::test]
    async fn test_query_failure_is_empty() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("page", records(3));
        library.fail_queries("index corrupt");
        let (adapter, _host) = ready_adapter(library).await;

        assert!(adapter.search(Some("page"), None).await.is_empty());
        assert!(matches!(
            adapter.try_search(&SearchQuery::new("page")).await,
            Err(SearchAdapterError::QueryFailure(_))
        ));
    }

    #[tokio::test]
    async fn test_record_without_url_is_rejected() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("page", vec![HitRecord::default()]);
        let (adapter, _host) = ready_adapter(library).await;

        assert!(matches!(
            adapter.try_search(&SearchQuery::new("page")).await,
            Err(SearchAdapterError::InvalidRecord(_))
        ));
        assert!(adapter.search(Some("page"), None).await.is_empty());
    }

    #[tokio::test]
    async fn test_configured_default_limit() {
        let library = Arc::new(MockIndexLibrary::new());
        library.register_results("page", records(6));
        let adapter = SearchAdapter::with_config(
            IndexSource::preloaded(library),
            Arc::new(RecordingHost::default()),
            SearchAdapterConfig::with_max_results(4),
        );
        adapter.initialize("http://localhost:1313", "en").await;

        assert_eq!(adapter.search(Some("page"), None).await.len(), 4);
    }
}
