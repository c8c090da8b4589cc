//! Configuration file reader.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use super::parser::parse_config_by_format;
use crate::error::file_error;
use crate::{Origin, Prefix, ResolvedMap, StrataError, StrataResult};

/// Read one configuration file into `into`.
///
/// Returns `Ok(false)` when the file does not exist, and `Ok(true)` once its
/// entries have been merged, overwriting keys already present. A file
/// contributes all of its keys or none of them.
///
/// # Examples
///
/// ```rust
/// use flag_strata::{Prefix, ResolvedMap, read_file};
/// use std::path::Path;
///
/// let mut map = ResolvedMap::new();
/// let found = read_file(&Prefix::new("APP_"), Path::new("no/such/file.yml"), &mut map)
///     .expect("a missing file is not an error");
/// assert!(!found);
/// assert!(map.is_empty());
/// ```
///
/// # Errors
///
/// Returns a [`StrataError::File`] when the file exists but cannot be read,
/// fails to decode, or is not a flat mapping.
pub fn read_file(prefix: &Prefix, path: &Path, into: &mut ResolvedMap) -> StrataResult<bool> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            tracing::debug!(path = %path.display(), "configuration file not present");
            return Ok(false);
        }
        Err(err) => return Err(file_error(prefix, path, err)),
    };
    let entries = parse_config_by_format(prefix, path, &data)?;
    tracing::debug!(
        path = %path.display(),
        keys = entries.len(),
        "loaded configuration file"
    );
    for (key, value) in entries {
        into.insert(key, value, Origin::File(path.to_path_buf()));
    }
    Ok(true)
}

/// Read every file in order, later files overriding earlier ones.
///
/// Failures are best effort: each is logged as a warning, pushed onto
/// `warnings`, and the remaining files are still read.
pub fn read_files<'a, I>(
    prefix: &Prefix,
    files: I,
    into: &mut ResolvedMap,
    warnings: &mut Vec<Arc<StrataError>>,
) where
    I: IntoIterator<Item = &'a Path>,
{
    for path in files {
        if let Err(err) = read_file(prefix, path, into) {
            tracing::warn!(
                prefix = %prefix,
                path = %path.display(),
                error = %err,
                "skipping configuration file"
            );
            warnings.push(err);
        }
    }
}
