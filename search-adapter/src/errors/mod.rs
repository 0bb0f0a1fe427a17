//! Error types for the search adapter host.

use thiserror::Error;

/// Errors that can occur while configuring or running the host.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failed to read a local file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse or write JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Error from the search adapter.
    #[error("Search adapter error: {0}")]
    AdapterError(#[from] search_adapter_repository::SearchAdapterError),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
