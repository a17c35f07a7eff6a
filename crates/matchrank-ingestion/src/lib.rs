//! matchrank-ingestion — Match table loading pipeline.
//! - CSV source with named-column resolution
//! - Malformed-row accounting
//! - Deterministic synthesis of missing relevancy scores
//! - Caller-owned table cache

pub mod cache;
pub mod csv_source;
pub mod scores;
pub mod table;

pub use cache::MatchTableCache;
pub use table::MatchTable;
