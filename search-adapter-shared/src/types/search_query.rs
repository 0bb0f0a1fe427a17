//! Search query types for the search adapter.

use serde::{Deserialize, Serialize};

/// Number of results returned when the caller does not ask for a limit.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// A single search request from the host.
///
/// The term is optional because hosts may call search before the user has
/// typed anything; an absent or empty term never reaches the index library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// The raw query text, passed to the index library unchanged.
    #[serde(default)]
    pub term: Option<String>,

    /// Maximum number of results to return.
    /// Default is 10, no upper bound.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl SearchQuery {
    /// Create a query for the given term with the default limit.
    ///
    /// # Example
    ///
    /// ```
    /// use search_adapter_shared::SearchQuery;
    ///
    /// let query = SearchQuery::new("install theme");
    /// assert_eq!(query.max_results, 10);
    /// ```
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Create a query with no term.
    pub fn empty() -> Self {
        Self {
            term: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Set the maximum number of results.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// The term if present and non-empty.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref().filter(|term| !term.is_empty())
    }

    /// Whether this query should be sent to the index library at all.
    pub fn is_searchable(&self) -> bool {
        self.term().is_some()
    }

    /// The words of the query, split on whitespace with empty tokens dropped.
    ///
    /// This approximates the matched words; index libraries do not expose
    /// their real match spans.
    ///
    /// ```
    /// use search_adapter_shared::SearchQuery;
    ///
    /// assert_eq!(SearchQuery::new("  red   fox ").matches(), vec!["red", "fox"]);
    /// ```
    pub fn matches(&self) -> Vec<String> {
        self.term
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_is_not_searchable() {
        assert!(!SearchQuery::new("").is_searchable());
        assert!(!SearchQuery::empty().is_searchable());
        assert!(SearchQuery::new(" ").is_searchable());
    }

    #[test]
    fn test_matches_drop_empty_tokens() {
        let query = SearchQuery::new("  red   fox ");
        assert_eq!(query.matches(), vec!["red", "fox"]);
    }

    #[test]
    fn test_matches_split_tabs_and_newlines() {
        let query = SearchQuery::new("red\tfox\njumps");
        assert_eq!(query.matches(), vec!["red", "fox", "jumps"]);
    }

    #[test]
    fn test_deserialize_defaults() {
        let query: SearchQuery = serde_json::from_str(r#"{"term": "hugo"}"#).unwrap();
        assert_eq!(query.term(), Some("hugo"));
        assert_eq!(query.max_results, DEFAULT_MAX_RESULTS);

        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.term(), None);
    }
}
