//! Wide per-candidate reshaping.
//!
//! Pivots the top-K index into one row per candidate with a fixed number
//! of flattened expert slots, matching the exported CSV layout. Unfilled
//! slots hold empty strings rather than being omitted, so every row keeps
//! a uniform field count.

use serde::{Deserialize, Serialize};

use matchrank_common::records::MatchRecord;

use crate::topk::TopKIndex;

/// One flattened expert slot of a wide row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpertSlot {
    pub expert_id: String,
    pub expert_name: String,
    pub expert_expertise: String,
    pub relevancy: String,
}

impl ExpertSlot {
    fn from_record(record: &MatchRecord) -> Self {
        Self {
            expert_id: record.expert_id.clone(),
            expert_name: record.expert_name.clone(),
            expert_expertise: record.expert_expertise_str().to_string(),
            relevancy: format_relevancy(record.relevancy_score),
        }
    }

    pub fn is_filled(&self) -> bool {
        !self.expert_id.is_empty()
    }
}

/// One candidate row of the wide table, slots ordered best-to-worst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WideRow {
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_expertise: String,
    pub experts: Vec<ExpertSlot>,
}

/// Render a relevancy score for export.
///
/// f64 `Display` is shortest-roundtrip, so repeated runs over the same
/// input serialise byte-identically.
pub fn format_relevancy(score: f64) -> String {
    score.to_string()
}

/// Pivot the top-K index into wide rows, one per candidate.
///
/// Rows come out in sorted candidate-id order; every row carries exactly
/// `k` expert slots, padded with empty slots when a candidate matched
/// fewer experts. Pure transform with no side effects.
pub fn widen_top_k(index: &TopKIndex, k: usize) -> Vec<WideRow> {
    index
        .candidates()
        .into_iter()
        .filter_map(|candidate_id| {
            let group = index.for_candidate(candidate_id)?;
            let first = group.first()?;

            let mut experts: Vec<ExpertSlot> =
                group.iter().take(k).map(ExpertSlot::from_record).collect();
            experts.resize(k, ExpertSlot::default());

            Some(WideRow {
                candidate_id: candidate_id.to_string(),
                candidate_name: first.candidate_name.clone(),
                candidate_expertise: first.candidate_expertise_str().to_string(),
                experts,
            })
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topk::top_k_per_candidate;

    fn record(candidate_id: &str, expert_id: &str, score: f64) -> MatchRecord {
        MatchRecord {
            candidate_id: candidate_id.to_string(),
            candidate_name: format!("Candidate {candidate_id}"),
            candidate_expertise: Some("Systems".to_string()),
            expert_id: expert_id.to_string(),
            expert_name: format!("Expert {expert_id}"),
            expert_expertise: Some("Compilers".to_string()),
            relevancy_score: score,
        }
    }

    #[test]
    fn test_every_row_has_exactly_k_slots() {
        let records = vec![
            record("C1", "E1", 0.9),
            record("C2", "E1", 0.8),
            record("C2", "E2", 0.7),
            record("C2", "E3", 0.6),
        ];
        let index = top_k_per_candidate(&records, 5);
        let rows = widen_top_k(&index, 5);

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.experts.len(), 5);
        }
    }

    #[test]
    fn test_unfilled_slots_are_empty_strings() {
        let records = vec![
            record("C1", "E1", 0.9),
            record("C1", "E2", 0.5),
            record("C1", "E3", 0.95),
            record("C1", "E4", 0.1),
        ];
        let index = top_k_per_candidate(&records, 5);
        let rows = widen_top_k(&index, 5);

        let row = &rows[0];
        assert!(row.experts[3].is_filled());
        let empty = &row.experts[4];
        assert!(!empty.is_filled());
        assert_eq!(empty.expert_id, "");
        assert_eq!(empty.expert_name, "");
        assert_eq!(empty.expert_expertise, "");
        assert_eq!(empty.relevancy, "");
    }

    #[test]
    fn test_slots_ordered_best_to_worst() {
        let records = vec![
            record("C1", "E1", 0.9),
            record("C1", "E2", 0.5),
            record("C1", "E3", 0.95),
        ];
        let index = top_k_per_candidate(&records, 5);
        let rows = widen_top_k(&index, 5);

        let slots = &rows[0].experts;
        assert_eq!(slots[0].expert_id, "E3");
        assert_eq!(slots[1].expert_id, "E1");
        assert_eq!(slots[2].expert_id, "E2");
        assert_eq!(slots[0].relevancy, "0.95");
    }

    #[test]
    fn test_rows_sorted_by_candidate_id() {
        let records = vec![
            record("C3", "E1", 0.9),
            record("C1", "E1", 0.8),
            record("C2", "E1", 0.7),
        ];
        let index = top_k_per_candidate(&records, 5);
        let rows = widen_top_k(&index, 5);

        let ids: Vec<&str> = rows.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn test_candidate_fields_from_best_record() {
        let records = vec![record("C1", "E1", 0.9)];
        let index = top_k_per_candidate(&records, 5);
        let rows = widen_top_k(&index, 5);

        assert_eq!(rows[0].candidate_name, "Candidate C1");
        assert_eq!(rows[0].candidate_expertise, "Systems");
    }

    #[test]
    fn test_empty_index_widens_to_no_rows() {
        let index = top_k_per_candidate(&[], 5);
        assert!(widen_top_k(&index, 5).is_empty());
    }
}
