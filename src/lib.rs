//! oci-locate: a read-only diagnostic that locates a container's OCI runtime
//! bundle across multiple container-runtime installations and reports its
//! identifying metadata.
//!
//! Given a container identifier, candidate paths are resolved as
//! `<root>/<identifier>/config.json` for every configured runtime root, then
//! each candidate is independently checked, read, and parsed. Absence or
//! failure at one candidate never aborts the scan: typically only one
//! runtime backend (if any) manages the identifier on a given host, and the
//! full per-candidate report is the product. The tool never writes to
//! runtime state.

pub mod cli;
pub mod container;
pub mod error;
pub mod fsutil;
pub mod report;
pub mod resolve;
pub mod roots;
pub mod scan;
pub mod state;

pub use error::RunError;

use crate::container::ContainerId;

/// Runs one locate invocation: validates the identifier, resolves candidate
/// paths, scans them, and renders the report to stdout.
///
/// # Errors
///
/// Only two conditions are fatal: an identifier unusable as a path segment
/// and failure to write the report. Every per-candidate failure is part of
/// the report itself, and a report where every candidate is `[MISSING]` is a
/// successful run.
pub fn run(cli: &cli::Cli) -> Result<(), RunError> {
    let id = ContainerId::new(&cli.identifier)?;
    let candidate_roots = cli.runtime_roots();
    log::debug!(
        "scanning {} runtime root(s) for container `{}`",
        candidate_roots.len(),
        id
    );

    let candidates = resolve::resolve(&id, &candidate_roots);
    let report = scan::scan(&candidates);

    let stdout = std::io::stdout();
    report::render(&mut stdout.lock(), &id, &report).map_err(RunError::WriteReport)
}
