//! Configuration and dependency initialization for the search adapter host.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{AdapterSettings, SourceMode};
