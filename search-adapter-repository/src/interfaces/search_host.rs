//! Host UI controller interface.

/// The host that owns the search input and renders results.
///
/// The adapter calls both methods once, at the end of `init`, whether or not
/// the index library loaded. A ready host is therefore never a guarantee of a
/// working backend; hosts must tolerate empty results.
pub trait SearchHost: Send + Sync {
    /// Set the host's "search engine ready" flag.
    fn set_search_engine_ready(&self, ready: bool);

    /// Ask the host to run any search the user queued before the adapter was ready.
    fn execute_initial_search(&self);
}
