//! Error types for the search adapter.
//!
//! This module provides a unified error type for loading and querying an
//! index library.

mod search_adapter_error;

pub use search_adapter_error::SearchAdapterError;
