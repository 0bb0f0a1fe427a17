//! Pagefind bundle served over HTTP.
//!
//! A plain `npx pagefind` build is searched client-side and only ships static
//! files, so this library needs a host that also answers queries for the
//! bundle. Endpoints, relative to the bundle directory:
//!
//! - `GET pagefind-entry.json`: the entry manifest written by Pagefind
//! - `GET search?q=<term>`: `{ "results": [ { "id": "<fragment id>" } ] }`
//! - `GET fragment/<id>.json`: one hit record as JSON
//!
//! Loading fetches the manifest and then checks the search endpoint with an
//! empty query. A bundle without a search endpoint fails to load, so the
//! adapter ends up failed-but-ready instead of answering every query with an
//! error.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use search_adapter_shared::HitRecord;
use serde::Deserialize;
use tracing::{debug, error, info};
use url::Url;

use crate::errors::SearchAdapterError;
use crate::interfaces::{IndexHit, IndexLibrary, IndexSearchResponse, LibraryLoader};
use crate::pagefind::bundle_config::{BundleConfig, BundleEntry, BundleUrls};

/// Loads a [`PagefindHttpLibrary`] from the site's bundle path.
pub struct PagefindLoader {
    client: Client,
    config: BundleConfig,
}

impl PagefindLoader {
    /// Create a loader with its own HTTP client.
    ///
    /// # Returns
    ///
    /// * `Ok(PagefindLoader)` - A new loader
    /// * `Err(SearchAdapterError::ConfigError)` - If the HTTP client cannot be built
    pub fn new(config: BundleConfig) -> Result<Self, SearchAdapterError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SearchAdapterError::config(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl LibraryLoader for PagefindLoader {
    async fn load(
        &self,
        base_url: &str,
        lang: &str,
    ) -> Result<Arc<dyn IndexLibrary>, SearchAdapterError> {
        let urls = self.config.resolve(base_url)?;
        let library = PagefindHttpLibrary::connect(self.client.clone(), urls).await?;

        if !library.entry().has_language(lang) {
            debug!(
                lang = %lang,
                languages = ?library.entry().languages.keys().collect::<Vec<_>>(),
                "Requested language not in bundle"
            );
        }

        Ok(Arc::new(library))
    }
}

/// A Pagefind bundle queried over HTTP.
pub struct PagefindHttpLibrary {
    client: Client,
    urls: BundleUrls,
    entry: BundleEntry,
}

impl PagefindHttpLibrary {
    /// Fetch the bundle's entry manifest and build a library around it.
    ///
    /// # Returns
    ///
    /// * `Ok(PagefindHttpLibrary)` - The bundle is present and searchable
    /// * `Err(SearchAdapterError::LoadFailure)` - If the manifest cannot be fetched or
    ///   parsed, or the bundle has no search endpoint
    pub async fn connect(client: Client, urls: BundleUrls) -> Result<Self, SearchAdapterError> {
        let entry_url = urls.entry()?;

        let response = client
            .get(entry_url.clone())
            .send()
            .await
            .map_err(|e| SearchAdapterError::load(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchAdapterError::load(format!(
                "Bundle manifest {} returned status {}",
                entry_url, status
            )));
        }

        let entry: BundleEntry = response
            .json()
            .await
            .map_err(|e| SearchAdapterError::load(format!("Invalid bundle manifest: {}", e)))?;

        Self::check_search_endpoint(&client, &urls).await?;

        info!(
            bundle = %urls.bundle(),
            version = %entry.version,
            languages = entry.languages.len(),
            page_count = entry.page_count(),
            "Loaded search bundle"
        );

        Ok(Self {
            client,
            urls,
            entry,
        })
    }

    async fn check_search_endpoint(
        client: &Client,
        urls: &BundleUrls,
    ) -> Result<(), SearchAdapterError> {
        let search_url = urls.search("")?;

        let response = client
            .get(search_url.clone())
            .send()
            .await
            .map_err(|e| SearchAdapterError::load(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchAdapterError::load(format!(
                "Bundle has no search endpoint: {} returned status {}",
                search_url, status
            )));
        }

        response
            .json::<SearchBody>()
            .await
            .map(|_| ())
            .map_err(|e| SearchAdapterError::load(format!("Invalid search endpoint: {}", e)))
    }

    /// The bundle's entry manifest.
    pub fn entry(&self) -> &BundleEntry {
        &self.entry
    }
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    results: Vec<HitRef>,
}

#[derive(Debug, Deserialize)]
struct HitRef {
    id: String,
}

#[async_trait]
impl IndexLibrary for PagefindHttpLibrary {
    async fn search(&self, term: &str) -> Result<IndexSearchResponse, SearchAdapterError> {
        let url = self.urls.search(term)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchAdapterError::query(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Search request failed");
            return Err(SearchAdapterError::query(format!(
                "Search failed with status {}: {}",
                status, error_body
            )));
        }

        let body: SearchBody = response
            .json()
            .await
            .map_err(|e| SearchAdapterError::parse(e.to_string()))?;

        let results = body
            .results
            .into_iter()
            .map(|hit| {
                let url = self.urls.fragment(&hit.id)?;
                Ok(Box::new(PagefindHit {
                    client: self.client.clone(),
                    url,
                }) as Box<dyn IndexHit>)
            })
            .collect::<Result<Vec<_>, SearchAdapterError>>()?;

        Ok(IndexSearchResponse::new(results))
    }
}

/// A lazy hit whose record is fetched on demand.
struct PagefindHit {
    client: Client,
    url: Url,
}

#[async_trait]
impl IndexHit for PagefindHit {
    async fn data(&self) -> Result<HitRecord, SearchAdapterError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| SearchAdapterError::hit(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchAdapterError::hit(format!(
                "Fragment {} returned status {}",
                self.url, status
            )));
        }

        response
            .json::<HitRecord>()
            .await
            .map_err(|e| SearchAdapterError::parse(format!("Invalid fragment {}: {}", self.url, e)))
    }
}
