//! Normalized result types handed back to the host.
//!
//! The shape is fixed by the host UI, independent of which index library
//! produced the hit.

use serde::{Deserialize, Serialize};

/// Page fields rendered by the host for a single result.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSummary {
    /// The page URL.
    pub uri: String,

    /// Page title with highlight markup removed.
    pub title: String,

    /// Always empty: index libraries do not expose the page hierarchy.
    pub breadcrumb: String,

    /// Excerpt or body text with highlight markup removed.
    pub content: String,

    /// Page tags.
    pub tags: Vec<String>,
}

/// A single search result in the host's shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedResult {
    /// The matched page.
    pub page: PageSummary,

    /// Non-empty words of the query term.
    pub matches: Vec<String>,
}

impl NormalizedResult {
    /// Create a result for the given page and query words.
    pub fn new(page: PageSummary, matches: Vec<String>) -> Self {
        Self { page, matches }
    }
}
