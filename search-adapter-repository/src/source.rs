//! Where the adapter gets its index library from.

use std::collections::HashMap;
use std::sync::Arc;

use search_adapter_shared::HitRecord;

use crate::errors::SearchAdapterError;
use crate::interfaces::{IndexLibrary, LibraryLoader};
use crate::mock::MockIndexLibrary;
use crate::pagefind::{BundleConfig, PagefindLoader};

/// The index library source for a [`SearchAdapter`](crate::SearchAdapter).
///
/// # Example
///
/// ```ignore
/// use search_adapter_repository::IndexSource;
/// use search_adapter_repository::pagefind::BundleConfig;
///
/// // Production: load the bundle the site serves
/// let source = IndexSource::pagefind(BundleConfig::default())?;
///
/// // Development/testing: use a pre-loaded mock
/// let source = IndexSource::mock(HashMap::new());
/// ```
pub enum IndexSource {
    /// A library instance that already exists; `init` reuses it without loading.
    Preloaded(Arc<dyn IndexLibrary>),

    /// Load the library at `init` time.
    Loader(Box<dyn LibraryLoader>),
}

impl IndexSource {
    /// Reuse an already loaded library.
    pub fn preloaded(library: Arc<dyn IndexLibrary>) -> Self {
        Self::Preloaded(library)
    }

    /// Load the library with a custom loader.
    pub fn loader(loader: Box<dyn LibraryLoader>) -> Self {
        Self::Loader(loader)
    }

    /// Load a Pagefind bundle served by the site.
    ///
    /// # Returns
    ///
    /// * `Ok(IndexSource)` - A loader-backed source
    /// * `Err(SearchAdapterError::ConfigError)` - If the HTTP client cannot be built
    pub fn pagefind(config: BundleConfig) -> Result<Self, SearchAdapterError> {
        Ok(Self::Loader(Box::new(PagefindLoader::new(config)?)))
    }

    /// Use a mock library with the given term → records mappings.
    pub fn mock(results: HashMap<String, Vec<HitRecord>>) -> Self {
        Self::Preloaded(Arc::new(MockIndexLibrary::with_results(results)))
    }

    /// Resolve the source into a library.
    pub(crate) async fn resolve(
        &self,
        base_url: &str,
        lang: &str,
    ) -> Result<Arc<dyn IndexLibrary>, SearchAdapterError> {
        match self {
            Self::Preloaded(library) => Ok(Arc::clone(library)),
            Self::Loader(loader) => loader.load(base_url, lang).await,
        }
    }
}

impl std::fmt::Debug for IndexSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preloaded(_) => f.write_str("IndexSource::Preloaded"),
            Self::Loader(_) => f.write_str("IndexSource::Loader"),
        }
    }
}
