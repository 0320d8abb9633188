use std::path::PathBuf;

use crate::fsutil;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Open(#[from] fsutil::FileOpenError),
    #[error("failed to read file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("file `{path}` does not contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },
}

impl Error {
    /// Whether the failure happened at the I/O level, before any content
    /// could be interpreted.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, Error::Open(_) | Error::Read { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
