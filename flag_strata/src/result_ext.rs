//! Extension for mapping errors to `StrataResult` concisely.
//!
//! Replaces repeated `.map_err(|e| Arc::new(StrataError::from(e)))` calls
//! when converting external error types, such as `clap::Error`, into the
//! crate's `StrataResult<T>` alias (`Result<T, Arc<StrataError>>`).
//!
//! # Examples
//!
//! ```
//! use flag_strata::{StrataResult, StrataResultExt};
//!
//! fn parse() -> StrataResult<clap::ArgMatches> {
//!     clap::Command::new("prog")
//!         .try_get_matches_from(["prog"])
//!         .into_strata()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{StrataError, StrataResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<StrataError>` into a `StrataResult<T>`.
pub trait StrataResultExt<T, E> {
    /// Convert `Result<T, E>` into `StrataResult<T>` using `Into<StrataError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<StrataError>`.
    fn into_strata(self) -> StrataResult<T>;
}

impl<T, E> StrataResultExt<T, E> for Result<T, E>
where
    E: Into<StrataError>,
{
    fn into_strata(self) -> StrataResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
