//! Console host for the search adapter.
//!
//! Stands in for the UI controller of a themed site: a search typed before
//! the engine is ready is queued, and run once the adapter asks for it.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use search_adapter_repository::SearchHost;
use tokio::sync::Notify;
use tracing::debug;

/// A host that queues one pending search until the adapter is ready.
#[derive(Default)]
pub struct ConsoleHost {
    ready: AtomicBool,
    pending: Mutex<Option<String>>,
    initial_search_requests: AtomicUsize,
    initial_search: Notify,
}

impl ConsoleHost {
    /// Create a host with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a search to run once the engine is ready.
    ///
    /// A later call replaces the queued term, like retyping in a search box.
    pub fn queue_search(&self, term: impl Into<String>) {
        *self.pending.lock().unwrap_or_else(|e| e.into_inner()) = Some(term.into());
    }

    /// Whether the adapter has signalled readiness.
    pub fn is_search_engine_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Number of times the adapter asked for the initial search.
    pub fn initial_search_requests(&self) -> usize {
        self.initial_search_requests.load(Ordering::SeqCst)
    }

    /// Wait until the adapter asks for the initial search, then take the queued term.
    ///
    /// Returns immediately if the request already happened.
    pub async fn wait_for_initial_search(&self) -> Option<String> {
        self.initial_search.notified().await;
        self.pending
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }
}

impl SearchHost for ConsoleHost {
    fn set_search_engine_ready(&self, ready: bool) {
        debug!(ready = ready, "Search engine ready flag set");
        self.ready.store(ready, Ordering::SeqCst);
    }

    fn execute_initial_search(&self) {
        self.initial_search_requests.fetch_add(1, Ordering::SeqCst);
        // notify_one stores a permit, so a waiter that arrives later still wakes.
        self.initial_search.notify_one();
    }
}
