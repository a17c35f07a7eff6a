//! matchrank-ranker — Top-K match reshaping engine.
//!
//! Groups the flat match table by candidate, ranks each group by
//! relevancy, and reshapes the result into the two exported views:
//! per-candidate top-K subsets and the wide one-row-per-candidate table.

pub mod export;
pub mod topk;
pub mod widen;

pub use export::{candidate_csv, wide_csv, wide_table_csv};
pub use topk::{rank_table, top_k_per_candidate, TopKIndex, DEFAULT_TOP_K};
pub use widen::{widen_top_k, ExpertSlot, WideRow};
