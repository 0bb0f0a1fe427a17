//! Pagefind implementation of the index library.
//!
//! This module provides a concrete `IndexLibrary` for a Pagefind bundle served
//! alongside the site, plus the `LibraryLoader` that finds it.

mod bundle_config;
mod library;

pub use bundle_config::{
    BundleConfig, BundleEntry, BundleUrls, LanguageEntry, DEFAULT_BUNDLE_PATH,
    DEFAULT_REQUEST_TIMEOUT, ENTRY_FILE,
};
pub use library::{PagefindHttpLibrary, PagefindLoader};
