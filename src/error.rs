use crate::container;

/// Fatal error for a whole locate run.
///
/// Per-candidate failures are report entries, never errors; only failing to
/// obtain a usable identifier or to emit the report aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    InvalidIdentifier(#[from] container::Error),
    #[error("failed to write report: {0}")]
    WriteReport(#[source] std::io::Error),
}

/// Extension for results whose failure is tolerated: the error is logged as
/// a warning and the result collapses to an [`Option`].
pub trait ResultOkLogExt<T, E> {
    fn ok_log(self) -> Option<T>;
}

impl<T, E> ResultOkLogExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn ok_log(self) -> Option<T> {
        match self {
            Ok(ok) => Some(ok),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }
}
