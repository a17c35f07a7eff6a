/// Core record types for the candidate-to-expert match table.
/// One `MatchRecord` is one row of the loaded input.

use serde::{Deserialize, Serialize};

/// A single candidate-to-expert match with its relevancy score.
///
/// After loading, every record carries a concrete score: inputs without a
/// relevancy column get deterministic synthesised scores at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub candidate_id: String,
    pub candidate_name: String,
    pub candidate_expertise: Option<String>,
    pub expert_id: String,
    pub expert_name: String,
    pub expert_expertise: Option<String>,
    pub relevancy_score: f64,
}

impl MatchRecord {
    /// Candidate expertise, empty string when the column was absent.
    pub fn candidate_expertise_str(&self) -> &str {
        self.candidate_expertise.as_deref().unwrap_or("")
    }

    /// Expert expertise, empty string when the column was absent.
    pub fn expert_expertise_str(&self) -> &str {
        self.expert_expertise.as_deref().unwrap_or("")
    }
}
