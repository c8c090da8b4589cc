//! Constructors shared by the source readers.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use super::StrataError;
use crate::Prefix;

/// Construct a [`StrataError::File`] for a configuration path.
pub(crate) fn file_error(
    prefix: &Prefix,
    path: &Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<StrataError> {
    Arc::new(StrataError::File {
        path: path.to_path_buf(),
        prefix: prefix.as_str().to_owned(),
        source: err.into(),
    })
}

/// Construct a [`StrataError::File`] describing structurally invalid content.
pub(crate) fn invalid_data(
    prefix: &Prefix,
    path: &Path,
    msg: impl Into<String>,
) -> Arc<StrataError> {
    file_error(
        prefix,
        path,
        std::io::Error::new(std::io::ErrorKind::InvalidData, msg.into()),
    )
}
