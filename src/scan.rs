//! Per-candidate scan pipeline.
//!
//! Each candidate path passes through a strictly linear
//! check→read→parse→extract pipeline with four terminal outcomes. Failures
//! are local to their candidate: only one runtime backend (if any) is
//! expected to manage a given identifier on a host, so absence or an error
//! at one candidate must never abort the rest of the scan. Nothing is
//! retried; a transient race surfaces in the report and the operator re-runs
//! the scan.

use std::path::{Path, PathBuf};

use crate::state::{self, StateSummary};

/// Terminal outcome for a single candidate path.
#[derive(Debug)]
pub enum Outcome {
    /// The candidate backend does not hold state for the identifier. This is
    /// the expected result for most candidates and not an error.
    Missing,
    /// The file exists but could not be read (permissions, a removal racing
    /// the existence check, an unreadable mount).
    ReadError(state::Error),
    /// The file was read but its contents are not a valid key/value tree.
    ParseError(state::Error),
    /// The bundle config was read and summarized.
    Found(StateSummary),
}

/// One report entry: a candidate path and what the scan found there.
#[derive(Debug)]
pub struct Candidate {
    path: PathBuf,
    outcome: Outcome,
}

impl Candidate {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// Scan result over the full candidate set: exactly one entry per candidate
/// path, in input order. No entry is ever dropped.
#[derive(Debug, Default)]
pub struct ScanReport {
    entries: Vec<Candidate>,
}

impl ScanReport {
    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }
}

/// Checks every candidate path sequentially and collects the total report.
///
/// Candidates share no state; each one's file handle is released within its
/// own check. Scanning unchanged paths twice yields identical reports.
pub fn scan(paths: &[PathBuf]) -> ScanReport {
    let entries = paths
        .iter()
        .map(|path| {
            log::debug!("checking candidate `{}`", path.display());
            Candidate {
                path: path.clone(),
                outcome: check_candidate(path),
            }
        })
        .collect();

    ScanReport { entries }
}

fn check_candidate(path: &Path) -> Outcome {
    if !path.exists() {
        return Outcome::Missing;
    }

    match state::load_summary(path) {
        Ok(summary) => Outcome::Found(summary),
        Err(err) if err.is_read_failure() => Outcome::ReadError(err),
        Err(err) => Outcome::ParseError(err),
    }
}
