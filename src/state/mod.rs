//! Loading and summarizing OCI runtime bundle configuration files.
//!
//! A bundle `config.json` describes a container's process, mounts, and
//! metadata. Only its identifying metadata matters here: the `annotations`
//! mapping (orchestrator-injected, e.g. kubernetes pod and namespace names),
//! the optional `labels` mapping, and the set of top-level keys. No other
//! OCI field is read or validated.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::fsutil;

mod error;

pub use error::{Error, Result};

/// Identifying metadata extracted from one bundle `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StateSummary {
    annotations: BTreeMap<String, String>,
    labels: Option<BTreeMap<String, String>>,
    top_keys: Vec<String>,
}

impl StateSummary {
    /// Orchestrator-injected annotations; empty when the document carries
    /// none.
    pub fn annotations(&self) -> &BTreeMap<String, String> {
        &self.annotations
    }

    /// User- or orchestrator-supplied labels, when the document carries a
    /// labels mapping at all.
    pub fn labels(&self) -> Option<&BTreeMap<String, String>> {
        self.labels.as_ref()
    }

    /// All top-level key names of the document, sorted.
    pub fn top_keys(&self) -> &[String] {
        &self.top_keys
    }
}

/// Loads the bundle config at `path` and reduces it to a [`StateSummary`].
///
/// The file is read in full and decoded as JSON; the handle does not outlive
/// this call.
///
/// # Errors
///
/// - [`Error::Open`] / [`Error::Read`] for I/O-level failures (permissions,
///   a file removed between existence check and read, unreadable mounts).
/// - [`Error::Parse`] if the contents are not valid JSON.
/// - [`Error::NotAnObject`] if the document decodes to something other than
///   a key/value tree.
pub fn load_summary(path: impl AsRef<Path>) -> Result<StateSummary> {
    let path = path.as_ref();
    let mut reader = fsutil::open_file_reader(path)?;
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let document: Value = serde_json::from_str(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Object(document) = document else {
        return Err(Error::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    Ok(summarize(&document))
}

/// Reduces a decoded bundle config to its identifying metadata.
///
/// An absent `annotations` key normalizes to an empty mapping, and an absent
/// `labels` key to `None`. A present-but-non-object value for either field
/// is normalized the same way as an absent one; non-string values inside
/// either mapping are skipped. Top-level keys are reported sorted.
pub fn summarize(document: &serde_json::Map<String, Value>) -> StateSummary {
    let annotations = document
        .get("annotations")
        .and_then(string_entries)
        .unwrap_or_default();
    let labels = document.get("labels").and_then(string_entries);
    let mut top_keys: Vec<String> = document.keys().cloned().collect();
    top_keys.sort_unstable();

    StateSummary {
        annotations,
        labels,
        top_keys,
    }
}

fn string_entries(value: &Value) -> Option<BTreeMap<String, String>> {
    let object = value.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_owned())))
            .collect(),
    )
}
