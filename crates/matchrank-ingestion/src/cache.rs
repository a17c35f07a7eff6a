//! Caller-owned cache for the loaded match table.
//!
//! The table is read once on first access and reused until `invalidate`
//! is called; the next access reloads from disk. The cache is a plain
//! value owned by the caller, with no process-wide state.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use matchrank_common::error::Result;

use crate::csv_source::load_match_csv;
use crate::table::MatchTable;

#[derive(Debug)]
pub struct MatchTableCache {
    path: PathBuf,
    score_seed: u64,
    table: Option<MatchTable>,
}

impl MatchTableCache {
    pub fn new(path: impl Into<PathBuf>, score_seed: u64) -> Self {
        Self {
            path: path.into(),
            score_seed,
            table: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// The cached table, loading it on first access.
    ///
    /// A load failure leaves the cache empty, so a later call retries.
    pub fn get(&mut self) -> Result<&MatchTable> {
        if self.table.is_none() {
            let table = load_match_csv(&self.path, self.score_seed)?;
            info!(
                path = %self.path.display(),
                n_records = table.len(),
                "Match table cached"
            );
            self.table = Some(table);
        }
        match &self.table {
            Some(table) => Ok(table),
            None => unreachable!("cache populated above"),
        }
    }

    /// Drop the cached table; the next `get` reloads from disk.
    pub fn invalidate(&mut self) {
        if self.table.take().is_some() {
            debug!(path = %self.path.display(), "Match table cache invalidated");
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
