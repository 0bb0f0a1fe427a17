//! # Search Adapter Repository
//!
//! This crate bridges a static-site search UI to a precompiled search index
//! library. It includes the interfaces for the wrapped library and the host,
//! the adapter service itself, a Pagefind bundle implementation served over
//! HTTP, and a mock library for tests.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod markup;
pub mod mock;
pub mod pagefind;
pub mod service;
pub mod source;
pub mod types;

pub use config::SearchAdapterConfig;
pub use errors::SearchAdapterError;
pub use interfaces::{
    IndexHit, IndexLibrary, IndexSearchResponse, LibraryLoader, SearchEngine, SearchHost,
};
pub use markup::strip_mark_tags;
pub use mock::MockIndexLibrary;
pub use pagefind::{PagefindHttpLibrary, PagefindLoader};
pub use service::SearchAdapter;
pub use source::IndexSource;
pub use types::AdapterStatus;
