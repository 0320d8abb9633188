use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Error that occurs when opening a file fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to open file `{path}`: {source}")]
pub struct FileOpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Opens the file at `path` for buffered reading.
///
/// # Errors
///
/// Returns a [`FileOpenError`] carrying the path if the file cannot be
/// opened.
///
/// # Example
/// ```no_run
/// # use oci_locate::fsutil;
/// let reader = fsutil::open_file_reader("/run/runc/abc/config.json")?;
/// # Ok::<(), fsutil::FileOpenError>(())
/// ```
pub fn open_file_reader(path: impl AsRef<Path>) -> Result<BufReader<File>, FileOpenError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileOpenError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_open_file_reader_reads_contents() {
        let mut tmp = tempfile::NamedTempFile::new().expect("failed to create temp file");
        std::io::Write::write_all(&mut tmp, b"{}").unwrap();
        let mut reader = open_file_reader(tmp.path()).expect("should open test file");
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "{}");
    }

    #[test]
    fn test_open_file_reader_missing_file() {
        let err = open_file_reader("/definitely/does/not/exist").unwrap_err();
        assert_eq!(err.path, PathBuf::from("/definitely/does/not/exist"));
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }
}
