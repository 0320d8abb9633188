//! Candidate path resolution.
//!
//! Container runtimes keep per-container live state under
//! `<root>/<container-id>/`, with the OCI bundle configuration stored as
//! `config.json` inside that directory. Resolution is pure path
//! concatenation mirroring that layout; it performs no I/O and cannot fail.

use std::path::{Path, PathBuf};

use crate::container::ContainerId;

/// On-disk name of the OCI runtime bundle configuration document.
pub const STATE_FILE_NAME: &str = "config.json";

/// Maps each runtime root to the bundle config path it would hold for `id`.
///
/// Produces exactly one candidate per root, in root order. The join rule is
/// the literal `<root>/<id>/config.json` used by the runtimes themselves and
/// is not configurable beyond the root list.
pub fn resolve(id: &ContainerId, roots: &[PathBuf]) -> Vec<PathBuf> {
    roots.iter().map(|root| candidate_path(root, id)).collect()
}

fn candidate_path(root: &Path, id: &ContainerId) -> PathBuf {
    root.join(id.as_ref()).join(STATE_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_one_candidate_per_root_in_order() {
        let id = ContainerId::new("abc123").unwrap();
        let roots = vec![PathBuf::from("/run/a"), PathBuf::from("/run/b")];

        let candidates = resolve(&id, &roots);

        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/run/a/abc123/config.json"),
                PathBuf::from("/run/b/abc123/config.json"),
            ]
        );
    }

    #[test]
    fn test_resolve_candidates_end_in_id_and_state_file() {
        let id = ContainerId::new("deadbeef").unwrap();
        let roots = vec![
            PathBuf::from("/run/containerd/io.containerd.runtime.v2.task/k8s.io"),
            PathBuf::from("/run/runc"),
            PathBuf::from("/run/docker/runtime-runc/moby"),
        ];

        let candidates = resolve(&id, &roots);

        assert_eq!(candidates.len(), roots.len());
        for candidate in &candidates {
            assert!(candidate.ends_with("deadbeef/config.json"));
        }
    }

    #[test]
    fn test_resolve_empty_roots() {
        let id = ContainerId::new("abc123").unwrap();
        assert!(resolve(&id, &[]).is_empty());
    }
}
