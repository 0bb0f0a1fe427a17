//! Index library trait definitions.
//!
//! The index library owns index construction, tokenization and ranking. The
//! adapter only forwards a term and resolves the hits it gets back.

use async_trait::async_trait;
use search_adapter_shared::HitRecord;

use crate::errors::SearchAdapterError;

/// Abstracts the precompiled search index being wrapped (Pagefind or similar).
///
/// Implementations are loaded once by the adapter and shared for the rest of
/// the process lifetime, so they must be `Send + Sync`.
#[async_trait]
pub trait IndexLibrary: Send + Sync {
    /// Run a query against the index.
    ///
    /// Hits are returned in the library's relevance order. Each hit is lazy:
    /// its full record is only fetched through [`IndexHit::data`].
    ///
    /// # Arguments
    ///
    /// * `term` - The raw query text, never empty
    ///
    /// # Returns
    ///
    /// * `Ok(IndexSearchResponse)` - The hits, possibly none
    /// * `Err(SearchAdapterError)` - If the library failed to run the query
    async fn search(&self, term: &str) -> Result<IndexSearchResponse, SearchAdapterError>;
}

/// A single lazy hit returned by an [`IndexLibrary`].
#[async_trait]
pub trait IndexHit: Send + Sync {
    /// Fetch the full record for this hit.
    async fn data(&self) -> Result<HitRecord, SearchAdapterError>;
}

/// The hits returned by a single query.
pub struct IndexSearchResponse {
    /// Hits in relevance order.
    pub results: Vec<Box<dyn IndexHit>>,
}

impl IndexSearchResponse {
    /// Create a response from hits in relevance order.
    pub fn new(results: Vec<Box<dyn IndexHit>>) -> Self {
        Self { results }
    }

    /// Returns the number of hits.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if there are no hits.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl std::fmt::Debug for IndexSearchResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexSearchResponse")
            .field("results", &self.results.len())
            .finish()
    }
}
