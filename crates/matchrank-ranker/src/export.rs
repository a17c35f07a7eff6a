//! CSV serialisation of the ranked views.
//!
//! Two layouts are exported: one file per candidate holding its ranked
//! expert rows, and one wide file covering every candidate. Fields are
//! quoted only when they contain the separator, a quote, or a line break.

use anyhow::Context;

use matchrank_common::error::{MatchrankError, Result};
use matchrank_common::records::MatchRecord;

use crate::topk::TopKIndex;
use crate::widen::{format_relevancy, widen_top_k, WideRow};

/// Header of the per-candidate export.
const CANDIDATE_HEADER: [&str; 7] = [
    "candidate_id",
    "candidate_name",
    "candidate_expertise",
    "expert_id",
    "expert_name",
    "expert_expertise",
    "relevancy_score",
];

/// Serialise one candidate's ranked expert list.
///
/// One data row per expert, best first, all record fields included.
pub fn candidate_csv(records: &[MatchRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(CANDIDATE_HEADER)?;

    for record in records {
        let score = format_relevancy(record.relevancy_score);
        writer.write_record([
            record.candidate_id.as_str(),
            record.candidate_name.as_str(),
            record.candidate_expertise_str(),
            record.expert_id.as_str(),
            record.expert_name.as_str(),
            record.expert_expertise_str(),
            score.as_str(),
        ])?;
    }

    writer_to_string(writer)
}

/// Serialise wide rows built for `k` slots.
///
/// The caller passes the same `k` used for `widen_top_k`, so the header
/// matches the slot count of every row.
pub fn wide_csv(rows: &[WideRow], k: usize) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(wide_header(k))?;

    for row in rows {
        let mut fields: Vec<&str> = vec![
            &row.candidate_id,
            &row.candidate_name,
            &row.candidate_expertise,
        ];
        for slot in &row.experts {
            fields.push(&slot.expert_id);
            fields.push(&slot.expert_name);
            fields.push(&slot.expert_expertise);
            fields.push(&slot.relevancy);
        }
        writer.write_record(&fields)?;
    }

    writer_to_string(writer)
}

/// Widen and serialise the whole index in one step.
pub fn wide_table_csv(index: &TopKIndex) -> Result<String> {
    let rows = widen_top_k(index, index.k());
    wide_csv(&rows, index.k())
}

fn wide_header(k: usize) -> Vec<String> {
    let mut header = vec![
        "candidate_id".to_string(),
        "candidate_name".to_string(),
        "candidate_expertise".to_string(),
    ];
    for i in 1..=k {
        header.push(format!("expert_{i}_id"));
        header.push(format!("expert_{i}_name"));
        header.push(format!("expert_{i}_expertise"));
        header.push(format!("expert_{i}_relevancy"));
    }
    header
}

fn writer_to_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| MatchrankError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes).context("CSV output was not valid UTF-8")?)
}

// ── Tests ───────────────────────────────────────────────────────────────────
