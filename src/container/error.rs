#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("container id is empty")]
    EmptyContainerID,
    #[error("container id is too long ({len} bytes): {id}")]
    ContainerIDTooLong { id: String, len: usize },
    #[error("container id contains a path separator: {0}")]
    ContainerIDPathSeparator(String),
    #[error("container id contains a parent-directory sequence: {0}")]
    ContainerIDTraversal(String),
}
pub type Result<T> = std::result::Result<T, Error>;
