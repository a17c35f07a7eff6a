//! Loaded match table plus load metadata.

use chrono::{DateTime, Utc};

use matchrank_common::records::MatchRecord;

/// The loaded input table.
///
/// Holds every well-formed record plus bookkeeping from the load: how
/// many rows were rejected and whether relevancy scores were synthesised
/// because the input carried none.
#[derive(Debug, Clone)]
pub struct MatchTable {
    records: Vec<MatchRecord>,
    skipped: usize,
    scores_synthesised: bool,
    loaded_at: DateTime<Utc>,
}

impl MatchTable {
    pub fn new(records: Vec<MatchRecord>, skipped: usize, scores_synthesised: bool) -> Self {
        Self {
            records,
            skipped,
            scores_synthesised,
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows rejected during the load (missing fields, bad scores).
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// True when the input had no relevancy column and scores were drawn
    /// from the seeded generator instead.
    pub fn scores_synthesised(&self) -> bool {
        self.scores_synthesised
    }

    /// When the table was loaded.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct candidate ids, sorted.
    pub fn candidate_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.candidate_id.as_str())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Display name for a candidate, taken from its first row.
    pub fn candidate_name(&self, candidate_id: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.candidate_id == candidate_id)
            .map(|r| r.candidate_name.as_str())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn record(candidate_id: &str, candidate_name: &str, expert_id: &str) -> MatchRecord {
        MatchRecord {
            candidate_id: candidate_id.to_string(),
            candidate_name: candidate_name.to_string(),
            candidate_expertise: None,
            expert_id: expert_id.to_string(),
            expert_name: format!("Expert {expert_id}"),
            expert_expertise: None,
            relevancy_score: 0.5,
        }
    }

    #[test]
    fn test_candidate_ids_sorted_and_distinct() {
        let table = MatchTable::new(
            vec![
                record("C2", "Beth", "E1"),
                record("C1", "Ada", "E1"),
                record("C2", "Beth", "E2"),
            ],
            0,
            false,
        );
        assert_eq!(table.candidate_ids(), vec!["C1", "C2"]);
    }

    #[test]
    fn test_candidate_name_lookup() {
        let table = MatchTable::new(vec![record("C1", "Ada", "E1")], 0, false);
        assert_eq!(table.candidate_name("C1"), Some("Ada"));
        assert_eq!(table.candidate_name("C9"), None);
    }
}
