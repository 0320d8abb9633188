//! CLI argument surface.

use std::path::PathBuf;

use clap::Parser;

use crate::roots;

/// Locate a container's OCI runtime bundle across runtime installations.
#[derive(Debug, Parser)]
#[command(name = "oci-locate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Container identifier, used verbatim as a path segment
    pub identifier: String,

    /// Runtime root directory to scan (repeatable; replaces the default
    /// root list)
    #[arg(
        long = "root",
        value_name = "DIR",
        env = "OCI_LOCATE_ROOTS",
        value_delimiter = ':'
    )]
    pub roots: Vec<PathBuf>,

    /// Also scan the full set of well-known runc task directories
    #[arg(long)]
    pub well_known: bool,

    /// Also scan rootless Docker roots discovered under /run/user
    #[arg(long)]
    pub rootless: bool,
}

impl Cli {
    /// Assembles the ordered root list for this invocation.
    ///
    /// Explicit `--root` flags replace the defaults; `--well-known` and
    /// `--rootless` append their sets. Duplicates are dropped while keeping
    /// first-seen order so the report stays deterministic.
    pub fn runtime_roots(&self) -> Vec<PathBuf> {
        let mut out = if self.roots.is_empty() {
            roots::defaults()
        } else {
            self.roots.clone()
        };
        if self.well_known {
            out.extend(roots::well_known());
        }
        if self.rootless {
            out.extend(roots::rootless_docker(roots::ROOTLESS_DOCKER_BASE));
        }

        roots::dedup_preserving_order(out)
    }
}
