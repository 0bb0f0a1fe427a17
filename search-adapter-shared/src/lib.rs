//! # Search Adapter Shared
//!
//! Request-scoped value types passed between the search adapter, the index
//! library it wraps, and the host UI that renders results. Nothing here is
//! persisted; every value is built per search call and handed to the caller.

pub mod types;

pub use types::hit_record::{HitMeta, HitRecord, Tags};
pub use types::search_query::{SearchQuery, DEFAULT_MAX_RESULTS};
pub use types::search_result::{NormalizedResult, PageSummary};
