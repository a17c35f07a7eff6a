//! Per-candidate top-K selection.

use std::collections::HashMap;

use tracing::debug;

use matchrank_common::records::MatchRecord;
use matchrank_ingestion::table::MatchTable;

/// Number of expert slots kept per candidate unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 5;

/// Per-candidate top-K expert lists, ordered best-to-worst.
///
/// Built once per input table and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct TopKIndex {
    by_candidate: HashMap<String, Vec<MatchRecord>>,
    k: usize,
}

impl TopKIndex {
    /// Ordered expert list for one candidate.
    ///
    /// `None` means the candidate does not appear in the input at all; a
    /// present candidate always has at least one record, so a lookup miss
    /// is never conflated with "zero experts".
    pub fn for_candidate(&self, candidate_id: &str) -> Option<&[MatchRecord]> {
        self.by_candidate
            .get(candidate_id)
            .map(|records| records.as_slice())
    }

    /// Distinct candidate ids, sorted for deterministic iteration.
    pub fn candidates(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.by_candidate.keys().map(|id| id.as_str()).collect();
        ids.sort();
        ids
    }

    /// Slot count the index was built with.
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn candidate_count(&self) -> usize {
        self.by_candidate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_candidate.is_empty()
    }
}

/// Group records by candidate, rank each group by relevancy descending,
/// and keep the best `k`.
///
/// The sort is stable: records with equal scores keep their input order.
/// Empty input yields an empty index; there are no error conditions.
pub fn top_k_per_candidate(records: &[MatchRecord], k: usize) -> TopKIndex {
    let mut by_candidate: HashMap<String, Vec<MatchRecord>> = HashMap::new();
    for record in records {
        by_candidate
            .entry(record.candidate_id.clone())
            .or_default()
            .push(record.clone());
    }

    for group in by_candidate.values_mut() {
        group.sort_by(|a, b| {
            b.relevancy_score
                .partial_cmp(&a.relevancy_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        group.truncate(k);
    }

    debug!(n_candidates = by_candidate.len(), k, "Built top-K index");
    TopKIndex { by_candidate, k }
}

/// Rank a loaded table end to end.
pub fn rank_table(table: &MatchTable, k: usize) -> TopKIndex {
    top_k_per_candidate(table.records(), k)
}

// ── Tests ───────────────────────────────────────────────────────────────────
