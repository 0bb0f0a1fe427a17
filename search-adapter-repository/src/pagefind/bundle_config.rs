//! Pagefind bundle location and manifest.
//!
//! A Pagefind build writes its bundle under `/pagefind/` in the site output.
//! The bundle's entry manifest lists the indexed languages.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::errors::SearchAdapterError;

/// Site-relative path the index bundle is served from.
pub const DEFAULT_BUNDLE_PATH: &str = "/pagefind/";

/// File name of the bundle's entry manifest.
pub const ENTRY_FILE: &str = "pagefind-entry.json";

/// Default HTTP request timeout for bundle requests.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for loading a Pagefind bundle over HTTP.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Path of the bundle, relative to the site root.
    pub bundle_path: String,
    /// Timeout applied to every bundle request.
    pub request_timeout: Duration,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            bundle_path: DEFAULT_BUNDLE_PATH.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl BundleConfig {
    /// Create a bundle configuration.
    ///
    /// # Arguments
    ///
    /// * `bundle_path` - The bundle path relative to the site root
    /// * `request_timeout` - Timeout for each HTTP request
    pub fn new(bundle_path: impl Into<String>, request_timeout: Duration) -> Self {
        Self {
            bundle_path: bundle_path.into(),
            request_timeout,
        }
    }

    /// Resolve the bundle directory against the site's base URL.
    ///
    /// The bundle path is treated as relative to the site root, so a site
    /// served under a sub-path keeps that sub-path.
    ///
    /// # Returns
    ///
    /// * `Ok(BundleUrls)` - URLs for the entry manifest, search and fragments
    /// * `Err(SearchAdapterError::ConfigError)` - If `base_url` is not a valid URL
    pub fn resolve(&self, base_url: &str) -> Result<BundleUrls, SearchAdapterError> {
        let mut root = Url::parse(base_url).map_err(|e| {
            SearchAdapterError::config(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }

        let mut relative = self.bundle_path.trim_start_matches('/').to_string();
        if !relative.ends_with('/') {
            relative.push('/');
        }

        let bundle = root.join(&relative).map_err(|e| {
            SearchAdapterError::config(format!(
                "invalid bundle path '{}': {}",
                self.bundle_path, e
            ))
        })?;

        Ok(BundleUrls { bundle })
    }
}

/// Resolved URLs of a served bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleUrls {
    bundle: Url,
}

impl BundleUrls {
    /// The bundle directory.
    pub fn bundle(&self) -> &Url {
        &self.bundle
    }

    /// The entry manifest.
    pub fn entry(&self) -> Result<Url, SearchAdapterError> {
        self.bundle
            .join(ENTRY_FILE)
            .map_err(|e| SearchAdapterError::config(e.to_string()))
    }

    /// The search endpoint for `term`.
    pub fn search(&self, term: &str) -> Result<Url, SearchAdapterError> {
        let mut url = self
            .bundle
            .join("search")
            .map_err(|e| SearchAdapterError::config(e.to_string()))?;
        url.query_pairs_mut().append_pair("q", term);
        Ok(url)
    }

    /// The record fragment for a hit.
    ///
    /// Fragment ids end up in the URL path, so they may only contain
    /// alphanumeric characters, underscores and dashes.
    pub fn fragment(&self, id: &str) -> Result<Url, SearchAdapterError> {
        if id.is_empty() {
            return Err(SearchAdapterError::invalid_record("Fragment id cannot be empty"));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(SearchAdapterError::invalid_record(format!(
                "Fragment id '{}' contains invalid characters",
                id
            )));
        }

        self.bundle
            .join(&format!("fragment/{}.json", id))
            .map_err(|e| SearchAdapterError::config(e.to_string()))
    }
}

/// The bundle's entry manifest.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BundleEntry {
    /// Version of the tool that built the bundle.
    pub version: String,
    /// Indexed languages keyed by language tag.
    #[serde(default)]
    pub languages: HashMap<String, LanguageEntry>,
}

/// One indexed language in a bundle.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LanguageEntry {
    /// Hash of the language's index metadata.
    pub hash: String,
    /// WebAssembly module used by browser clients, if any.
    #[serde(default)]
    pub wasm: Option<String>,
    /// Number of indexed pages.
    #[serde(default)]
    pub page_count: u64,
}

impl BundleEntry {
    /// Total pages across all languages.
    pub fn page_count(&self) -> u64 {
        self.languages.values().map(|l| l.page_count).sum()
    }

    /// Whether `lang` is one of the indexed languages.
    pub fn has_language(&self, lang: &str) -> bool {
        self.languages.contains_key(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_site_root() {
        let urls = BundleConfig::default()
            .resolve("http://localhost:1313")
            .unwrap();
        assert_eq!(urls.bundle().as_str(), "http://localhost:1313/pagefind/");
        assert_eq!(
            urls.entry().unwrap().as_str(),
            "http://localhost:1313/pagefind/pagefind-entry.json"
        );
    }

    #[test]
    fn test_resolve_keeps_sub_path() {
        let urls = BundleConfig::default()
            .resolve("https://example.org/docs")
            .unwrap();
        assert_eq!(urls.bundle().as_str(), "https://example.org/docs/pagefind/");
    }

    #[test]
    fn test_resolve_custom_bundle_path() {
        let config = BundleConfig::new("search/index", DEFAULT_REQUEST_TIMEOUT);
        let urls = config.resolve("https://example.org/").unwrap();
        assert_eq!(urls.bundle().as_str(), "https://example.org/search/index/");
    }

    #[test]
    fn test_resolve_invalid_base_url() {
        let result = BundleConfig::default().resolve("not a url");
        assert!(matches!(result, Err(SearchAdapterError::ConfigError(_))));
    }

    #[test]
    fn test_search_url_encodes_term() {
        let urls = BundleConfig::default().resolve("http://localhost/").unwrap();
        assert_eq!(
            urls.search("red fox&more").unwrap().as_str(),
            "http://localhost/pagefind/search?q=red+fox%26more"
        );
    }

    #[test]
    fn test_fragment_url() {
        let urls = BundleConfig::default().resolve("http://localhost/").unwrap();
        assert_eq!(
            urls.fragment("en_3a9f1c").unwrap().as_str(),
            "http://localhost/pagefind/fragment/en_3a9f1c.json"
        );
    }

    #[test]
    fn test_fragment_rejects_path_characters() {
        let urls = BundleConfig::default().resolve("http://localhost/").unwrap();
        assert!(matches!(
            urls.fragment("../secret"),
            Err(SearchAdapterError::InvalidRecord(_))
        ));
        assert!(matches!(
            urls.fragment(""),
            Err(SearchAdapterError::InvalidRecord(_))
        ));
    }

    #[test]
    fn test_parse_entry_manifest() {
        let json = r#"{
            "version": "1.1.0",
            "languages": {
                "en": { "hash": "en_1234", "wasm": "en", "page_count": 42 },
                "de": { "hash": "de_5678", "wasm": null, "page_count": 8 }
            }
        }"#;
        let entry: BundleEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.version, "1.1.0");
        assert_eq!(entry.page_count(), 50);
        assert!(entry.has_language("de"));
        assert!(!entry.has_language("fr"));
    }
}
