//! Candidate runtime-root directories.
//!
//! A runtime root is a base directory under which one container-runtime
//! installation persists per-container live state. Which installation (if
//! any) manages a given identifier is unknown up front, so a scan always
//! checks every configured root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::ResultOkLogExt;

/// Base directory holding per-user rootless Docker runtime state.
pub const ROOTLESS_DOCKER_BASE: &str = "/run/user";

/// The default root list: containerd's kubernetes task directory plus the
/// microk8s snap-confined variant of the same layout.
pub fn defaults() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/run/containerd/io.containerd.runtime.v2.task/k8s.io"),
        PathBuf::from(
            "/var/snap/microk8s/common/run/containerd/io.containerd.runtime.v2.task/k8s.io",
        ),
    ]
}

/// Runtime roots used by containerd, microk8s, plain runc, and Docker across
/// the installation layouts observed in the field.
pub fn well_known() -> Vec<PathBuf> {
    [
        "/run/containerd/io.containerd.runtime.v2.task/k8s.io",
        "/run/containerd/io.containerd.runtime.v1.linux/k8s.io",
        "/run/containerd/runc/k8s.io",
        "/var/snap/microk8s/common/run/containerd/runc/k8s.io",
        "/var/snap/microk8s/common/run/containerd/io.containerd.runtime.v2.task/k8s.io",
        "/run/runc",
        "/run/docker/runtime-runc/moby",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// Discovers rootless Docker runtime roots below `base`.
///
/// Each per-user entry expands to `<base>/<uid>/docker/runtime-runc/moby`.
/// A host without rootless Docker is not an error: an unreadable or missing
/// base yields an empty list, with the cause logged.
pub fn rootless_docker(base: impl AsRef<Path>) -> Vec<PathBuf> {
    let base = base.as_ref();
    let entries = match std::fs::read_dir(base) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("skipping rootless base `{}`: {}", base.display(), err);
            return Vec::new();
        }
    };

    let mut roots = Vec::new();
    for entry in entries {
        let Some(entry) = entry.ok_log() else {
            continue;
        };
        let path = entry.path();
        if path.is_dir() {
            roots.push(path.join("docker/runtime-runc/moby"));
        }
    }
    roots
}

/// De-duplicates a root list while preserving first-seen order, keeping the
/// scan and its report deterministic when flag-supplied sets overlap.
pub fn dedup_preserving_order(roots: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::with_capacity(roots.len());
    roots
        .into_iter()
        .filter(|root| seen.insert(root.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_subset_of_well_known() {
        let known = well_known();
        for root in defaults() {
            assert!(known.contains(&root), "missing {}", root.display());
        }
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let roots = vec![
            PathBuf::from("/run/b"),
            PathBuf::from("/run/a"),
            PathBuf::from("/run/b"),
            PathBuf::from("/run/c"),
            PathBuf::from("/run/a"),
        ];

        let deduped = dedup_preserving_order(roots);

        assert_eq!(
            deduped,
            vec![
                PathBuf::from("/run/b"),
                PathBuf::from("/run/a"),
                PathBuf::from("/run/c"),
            ]
        );
    }

    #[test]
    fn test_rootless_docker_expands_per_user_dirs() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("1000")).unwrap();
        std::fs::create_dir(base.path().join("1001")).unwrap();
        std::fs::write(base.path().join("stray-file"), b"ignored").unwrap();

        let mut roots = rootless_docker(base.path());
        roots.sort_unstable();

        assert_eq!(
            roots,
            vec![
                base.path().join("1000/docker/runtime-runc/moby"),
                base.path().join("1001/docker/runtime-runc/moby"),
            ]
        );
    }

    #[test]
    fn test_rootless_docker_missing_base() {
        assert!(rootless_docker("/definitely/does/not/exist").is_empty());
    }
}
