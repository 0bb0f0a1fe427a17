//! Interface definitions for the search adapter.
//!
//! - [`IndexLibrary`] / [`IndexHit`]: the external index library being wrapped
//! - [`LibraryLoader`]: loads an index library at runtime
//! - [`SearchHost`]: the host UI controller the adapter signals
//! - [`SearchEngine`]: the `{init, search}` capability the adapter exposes

mod index_library;
mod library_loader;
mod search_engine;
mod search_host;

pub use index_library::{IndexHit, IndexLibrary, IndexSearchResponse};
pub use library_loader::LibraryLoader;
pub use search_engine::SearchEngine;
pub use search_host::SearchHost;
