//! matchrank-common — Shared types, errors, and configuration used across all Matchrank crates.

pub mod error;
pub mod ranking_config;
pub mod records;

// Re-export commonly used types
pub use error::{MatchrankError, Result};
pub use ranking_config::{InputConfig, OutputConfig, RankingConfig, RankingOptions};
pub use records::MatchRecord;
