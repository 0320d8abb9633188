//! Human-readable rendering of a [`ScanReport`].
//!
//! The report is diagnostic text: the identifier under investigation, then
//! one block per candidate path in scan order. Absence on some candidates
//! combined with presence on another is the expected, successful shape of a
//! report, so every entry is printed, tagged `[MISSING]`, `[ERROR]`, or
//! `[OK]`.

use std::io;

use crate::container::ContainerId;
use crate::scan::{Outcome, ScanReport};
use crate::state::StateSummary;

/// Writes the full report for `id` to `out`, in candidate order.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render<W: io::Write>(out: &mut W, id: &ContainerId, report: &ScanReport) -> io::Result<()> {
    writeln!(out, "Checking for container: {id}")?;
    for candidate in report.entries() {
        writeln!(out, "Checking path: {}", candidate.path().display())?;
        match candidate.outcome() {
            Outcome::Missing => writeln!(out, "  [MISSING] File not found.")?,
            Outcome::ReadError(cause) | Outcome::ParseError(cause) => {
                writeln!(out, "  [ERROR] {cause}")?;
            }
            Outcome::Found(summary) => render_summary(out, summary)?,
        }
    }

    Ok(())
}

fn render_summary<W: io::Write>(out: &mut W, summary: &StateSummary) -> io::Result<()> {
    writeln!(out, "  [OK]")?;
    writeln!(out, "  Annotations found: {}", summary.annotations().len())?;
    serde_json::to_writer_pretty(&mut *out, summary.annotations()).map_err(io::Error::from)?;
    writeln!(out)?;
    writeln!(out, "  Top level keys: {:?}", summary.top_keys())?;
    if let Some(labels) = summary.labels() {
        writeln!(out, "  Labels:")?;
        serde_json::to_writer_pretty(&mut *out, labels).map_err(io::Error::from)?;
        writeln!(out)?;
    }

    Ok(())
}
