//! Index library loader trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::SearchAdapterError;
use crate::interfaces::IndexLibrary;

/// Loads an index library at runtime, the way a browser imports a bundle
/// served by the site.
#[async_trait]
pub trait LibraryLoader: Send + Sync {
    /// Load the library for the site rooted at `base_url`.
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<dyn IndexLibrary>)` - The loaded library
    /// * `Err(SearchAdapterError::LoadFailure)` - If the bundle is missing or unreadable
    async fn load(
        &self,
        base_url: &str,
        lang: &str,
    ) -> Result<Arc<dyn IndexLibrary>, SearchAdapterError>;
}
