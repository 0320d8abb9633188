use std::borrow::Borrow;
use std::fmt;

mod error;

pub use error::{Error, Result};

/// The maximum allowed length for a [`ContainerId`], in bytes.
const CONTAINER_ID_MAX_LEN: usize = 255;

/// A validated container identifier.
///
/// The identifier is an opaque runtime-assigned token (typically a content
/// hash) that is spliced verbatim into candidate bundle paths. Construction
/// therefore rejects anything that could escape the per-container directory:
/// path separators and parent-directory (`..`) sequences, as well as empty
/// and over-long inputs. Surrounding whitespace is trimmed.
///
/// # Examples
///
/// ```
/// # use oci_locate::container::ContainerId;
/// let raw = "46cbb73a47bb8869a7447f3939f059f9f28de8bf7991ab28de9eeebf1a290fa3";
/// let id = ContainerId::new(raw).unwrap();
/// assert_eq!(id.as_ref(), raw);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerId(Box<str>);

impl ContainerId {
    /// Creates a new `ContainerId` from the given raw id.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyContainerID`] if the trimmed input is empty.
    /// - [`Error::ContainerIDTooLong`] if the input exceeds
    ///   [`CONTAINER_ID_MAX_LEN`] bytes.
    /// - [`Error::ContainerIDPathSeparator`] if the input contains `/` or `\`.
    /// - [`Error::ContainerIDTraversal`] if the input contains a `..`
    ///   sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use oci_locate::container::ContainerId;
    /// assert!(ContainerId::new("abc123").is_ok());
    /// assert!(ContainerId::new("../etc").is_err());
    /// ```
    pub fn new(src: impl AsRef<str>) -> Result<Self> {
        let src = src.as_ref().trim();
        if src.is_empty() {
            return Err(Error::EmptyContainerID);
        }
        if src.len() > CONTAINER_ID_MAX_LEN {
            return Err(Error::ContainerIDTooLong {
                id: src.to_owned(),
                len: src.len(),
            });
        }
        if src.contains(['/', '\\']) {
            return Err(Error::ContainerIDPathSeparator(src.to_owned()));
        }
        if src.contains("..") {
            return Err(Error::ContainerIDTraversal(src.to_owned()));
        }

        Ok(Self(src.into()))
    }
}

impl AsRef<str> for ContainerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ContainerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
