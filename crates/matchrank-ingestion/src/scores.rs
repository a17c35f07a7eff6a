//! Deterministic fallback scoring for tables without a relevancy column.

use rand::Rng;
use tracing::info;

use matchrank_common::records::MatchRecord;

/// Seed used when the input carries no relevancy column.
/// Fixed so repeated loads of the same table rank identically.
pub const DEFAULT_SCORE_SEED: u64 = 42;

/// Assign each record an independent uniform score in [0, 1).
///
/// Scores are drawn in row order from the caller's generator; callers seed
/// it explicitly so the synthesised ranking is reproducible. There is no
/// global generator state.
pub fn fill_missing_scores<R: Rng>(records: &mut [MatchRecord], rng: &mut R) {
    for record in records.iter_mut() {
        record.relevancy_score = rng.gen::<f64>();
    }
    info!(n_records = records.len(), "Synthesised relevancy scores");
}

// ── Tests ───────────────────────────────────────────────────────────────────
