//! Match table CSV source.
//!
//! Loads the candidate-to-expert match table from a CSV export. Columns
//! are resolved by header name, so the loader tolerates reordered or
//! extra columns.
//!
//! Required columns: candidate_id, candidate_name, expert_id, expert_name
//! Optional columns: candidate_expertise, expert_expertise, relevancy_score
//!
//! Rows missing a required field, or carrying an unparseable relevancy
//! value, are skipped and counted; the batch never fails on individual
//! bad rows. A missing relevancy column is not an error: scores are
//! synthesised from a seeded generator instead.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use csv::StringRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use matchrank_common::error::{MatchrankError, Result};
use matchrank_common::records::MatchRecord;

use crate::scores::fill_missing_scores;
use crate::table::MatchTable;

/// Column indices resolved from the CSV header row.
struct ColumnLayout {
    candidate_id: usize,
    candidate_name: usize,
    expert_id: usize,
    expert_name: usize,
    candidate_expertise: Option<usize>,
    expert_expertise: Option<usize>,
    relevancy_score: Option<usize>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let required = |name: &str| {
            position(name).ok_or_else(|| MatchrankError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            candidate_id: required("candidate_id")?,
            candidate_name: required("candidate_name")?,
            expert_id: required("expert_id")?,
            expert_name: required("expert_name")?,
            candidate_expertise: position("candidate_expertise"),
            expert_expertise: position("expert_expertise"),
            relevancy_score: position("relevancy_score"),
        })
    }
}

/// Load the match table from a CSV file.
///
/// A missing file is a `SourceNotFound` error; callers surface it as
/// "no data available" rather than reshaping an empty table.
pub fn load_match_csv(path: &Path, score_seed: u64) -> Result<MatchTable> {
    if !path.exists() {
        return Err(MatchrankError::SourceNotFound(path.display().to_string()));
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open match table at {}", path.display()))?;

    info!(path = %path.display(), "Loading match table");
    read_match_table(file, score_seed)
}

/// Read the match table from any reader.
///
/// Split out from `load_match_csv` so tests can load from memory.
pub fn read_match_table<R: Read>(reader: R, score_seed: u64) -> Result<MatchTable> {
    // Flexible: short rows are rejected per-row below, not as a whole-load error.
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let layout = ColumnLayout::resolve(&headers)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in csv_reader.records() {
        let row = row?;
        match parse_row(&row, &layout) {
            Some(record) => records.push(record),
            None => {
                debug!(row = ?row, "Skipping malformed row");
                skipped += 1;
            }
        }
    }

    let scores_synthesised = layout.relevancy_score.is_none();
    if scores_synthesised {
        let mut rng = StdRng::seed_from_u64(score_seed);
        fill_missing_scores(&mut records, &mut rng);
    }

    if skipped > 0 {
        warn!(n_skipped = skipped, "Rejected malformed match rows");
    }
    info!(
        n_records = records.len(),
        n_skipped = skipped,
        scores_synthesised,
        "Match table loaded"
    );

    Ok(MatchTable::new(records, skipped, scores_synthesised))
}

/// Parse one data row. Returns None for rows the table should not keep:
/// missing required fields, or a relevancy value that does not parse to a
/// finite float.
fn parse_row(row: &StringRecord, layout: &ColumnLayout) -> Option<MatchRecord> {
    let required = |idx: usize| {
        row.get(idx)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let optional = |idx: Option<usize>| {
        idx.and_then(|i| row.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    let relevancy_score = match layout.relevancy_score {
        Some(idx) => {
            let score = row.get(idx)?.trim().parse::<f64>().ok()?;
            if !score.is_finite() {
                return None;
            }
            score
        }
        // Filled in afterwards by the seeded generator.
        None => 0.0,
    };

    Some(MatchRecord {
        candidate_id: required(layout.candidate_id)?,
        candidate_name: required(layout.candidate_name)?,
        candidate_expertise: optional(layout.candidate_expertise),
        expert_id: required(layout.expert_id)?,
        expert_name: required(layout.expert_name)?,
        expert_expertise: optional(layout.expert_expertise),
        relevancy_score,
    })
}

// ── Tests ───────────────────────────────────────────────────────────────────
