//! Mock index library for testing and local development.
//!
//! The `MockIndexLibrary` can be pre-populated with term → records mappings,
//! allowing tests and demos to run without a built site.
//!
//! # Example
//!
//! ```ignore
//! use search_adapter_repository::{IndexLibrary, MockIndexLibrary};
//! use search_adapter_shared::HitRecord;
//!
//! let library = MockIndexLibrary::new();
//! library.register_results("hugo", vec![HitRecord::new("/basics/").with_title("Basics")]);
//! let response = library.search("hugo").await?;
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use search_adapter_shared::HitRecord;

use crate::errors::SearchAdapterError;
use crate::interfaces::{IndexHit, IndexLibrary, IndexSearchResponse};

/// What resolving a mock hit produces.
#[derive(Debug, Clone)]
enum MockOutcome {
    Record(HitRecord),
    Failure(String),
}

/// Mock index library that returns pre-configured records per term.
///
/// Records are returned in registration order, standing in for the
/// library's relevance order.
pub struct MockIndexLibrary {
    results: RwLock<HashMap<String, Vec<MockOutcome>>>,
    query_failure: RwLock<Option<String>>,
    search_calls: AtomicUsize,
    data_calls: Arc<AtomicUsize>,
}

impl Default for MockIndexLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl MockIndexLibrary {
    /// Create a new empty mock library.
    pub fn new() -> Self {
        Self {
            results: RwLock::new(HashMap::new()),
            query_failure: RwLock::new(None),
            search_calls: AtomicUsize::new(0),
            data_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock library pre-populated with term → records mappings.
    pub fn with_results(results: HashMap<String, Vec<HitRecord>>) -> Self {
        let library = Self::new();
        for (term, records) in results {
            library.register_results(&term, records);
        }
        library
    }

    /// Register the records returned for `term`, replacing earlier ones.
    pub fn register_results(&self, term: &str, records: Vec<HitRecord>) {
        let outcomes = records.into_iter().map(MockOutcome::Record).collect();
        self.results
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(term.to_string(), outcomes);
    }

    /// Append a hit for `term` whose `data()` call fails.
    pub fn register_failing_hit(&self, term: &str, message: impl Into<String>) {
        self.results
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(term.to_string())
            .or_default()
            .push(MockOutcome::Failure(message.into()));
    }

    /// Make every subsequent query fail with `message`.
    pub fn fail_queries(&self, message: impl Into<String>) {
        *self
            .query_failure
            .write()
            .unwrap_or_else(|e| e.into_inner()) = Some(message.into());
    }

    /// Number of times `search` was called.
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of hits whose records were requested.
    pub fn data_calls(&self) -> usize {
        self.data_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IndexLibrary for MockIndexLibrary {
    async fn search(&self, term: &str) -> Result<IndexSearchResponse, SearchAdapterError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self
            .query_failure
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
        {
            return Err(SearchAdapterError::query(message));
        }

        let outcomes = self
            .results
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(term)
            .cloned()
            .unwrap_or_default();

        let hits = outcomes
            .into_iter()
            .map(|outcome| {
                Box::new(MockHit {
                    outcome,
                    data_calls: Arc::clone(&self.data_calls),
                }) as Box<dyn IndexHit>
            })
            .collect();

        Ok(IndexSearchResponse::new(hits))
    }
}

struct MockHit {
    outcome: MockOutcome,
    data_calls: Arc<AtomicUsize>,
}

#[async_trait]
impl IndexHit for MockHit {
    async fn data(&self) -> Result<HitRecord, SearchAdapterError> {
        self.data_calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Record(record) => Ok(record.clone()),
            MockOutcome::Failure(message) => Err(SearchAdapterError::hit(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_term_returns_no_hits() {
        let library = MockIndexLibrary::new();
        let response = library.search("missing").await.unwrap();
        assert!(response.is_empty());
        assert_eq!(library.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_registered_records_keep_order() {
        let library = MockIndexLibrary::new();
        library.register_results(
            "hugo",
            vec![HitRecord::new("/first/"), HitRecord::new("/second/")],
        );

        let response = library.search("hugo").await.unwrap();
        assert_eq!(response.len(), 2);

        let first = response.results[0].data().await.unwrap();
        let second = response.results[1].data().await.unwrap();
        assert_eq!(first.url, "/first/");
        assert_eq!(second.url, "/second/");
        assert_eq!(library.data_calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_hit_and_query() {
        let library = MockIndexLibrary::new();
        library.register_failing_hit("hugo", "fragment missing");

        let response = library.search("hugo").await.unwrap();
        assert!(matches!(
            response.results[0].data().await,
            Err(SearchAdapterError::HitFailure(_))
        ));

        library.fail_queries("index corrupt");
        assert!(matches!(
            library.search("hugo").await,
            Err(SearchAdapterError::QueryFailure(_))
        ));
    }
}
