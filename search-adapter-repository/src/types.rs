//! Lifecycle types for the search adapter.

/// Where the adapter is in its one-way lifecycle.
///
/// `Uninitialized → Loading → {Ready, FailedButReady}`. Both terminal states
/// accept searches; only `Ready` can return results. There is no way back to
/// `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterStatus {
    /// `init` has not been called.
    Uninitialized,
    /// `init` is loading the index library.
    Loading,
    /// The index library is loaded and searchable.
    Ready,
    /// Loading failed; the host was still unblocked.
    FailedButReady,
}
