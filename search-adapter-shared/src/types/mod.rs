//! Value types for the search adapter.
//!
//! - [`hit_record`]: the record an index library returns for a single hit
//! - [`search_query`]: the query a host sends to the adapter
//! - [`search_result`]: the normalized shape handed back to the host

pub mod hit_record;
pub mod search_query;
pub mod search_result;
