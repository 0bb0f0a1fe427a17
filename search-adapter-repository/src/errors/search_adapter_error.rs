//! Search adapter error types.
//!
//! The public `search` operation never returns these; they flow through the
//! internal helpers so callers and tests can inspect what went wrong before
//! the adapter collapses them into an empty result.

use thiserror::Error;

/// Unified errors from loading and querying an index library.
#[derive(Debug, Clone, Error)]
pub enum SearchAdapterError {
    /// The index library could not be loaded (missing bundle, network failure, bad manifest).
    #[error("Load failure: {0}")]
    LoadFailure(String),

    /// The index library failed to run a query.
    #[error("Query failure: {0}")]
    QueryFailure(String),

    /// Resolving the full record of a single hit failed.
    #[error("Hit failure: {0}")]
    HitFailure(String),

    /// A response from the index library could not be parsed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A hit record was missing required fields.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// No index library has been loaded.
    #[error("Index library not loaded")]
    NotLoaded,

    /// Invalid adapter or bundle configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SearchAdapterError {
    /// Create a load failure.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::LoadFailure(msg.into())
    }

    /// Create a query failure.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryFailure(msg.into())
    }

    /// Create a hit failure.
    pub fn hit(msg: impl Into<String>) -> Self {
        Self::HitFailure(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create an invalid record error.
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
