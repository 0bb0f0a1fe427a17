//! # Search Adapter
//!
//! Host-side wiring for the static-site search adapter.
//!
//! ## Modules
//!
//! - [`config`]: Settings from the environment and dependency wiring
//! - [`host`]: A console host that queues a search until the adapter is ready
//! - [`errors`]: Error types for the host

pub mod config;
pub mod errors;
pub mod host;

pub use config::{AdapterSettings, Dependencies, SourceMode};
pub use errors::AppError;
pub use host::ConsoleHost;
