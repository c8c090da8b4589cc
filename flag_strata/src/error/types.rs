//! Primary error enum for resolution flows.

use std::path::PathBuf;

use thiserror::Error;

use crate::Origin;

/// Errors that can occur while resolving flag defaults.
///
/// File failures never abort a resolution pass: they are logged and handed
/// back as warnings on [`crate::Resolution`], as are layered values rejected
/// by their argument. Only argument parsing and a declined confirmation
/// reach the caller as errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrataError {
    /// Error parsing command-line arguments.
    #[error("Failed to parse command-line arguments: {0}")]
    CliParsing(#[from] Box<clap::Error>),

    /// A configuration file exists but could not be read or decoded.
    #[error("Configuration file error in '{path}' (prefix: {prefix}): {source}")]
    File {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Prefix of the resolution pass reading the file.
        prefix: String,
        /// Underlying read or decode error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A file or environment value was rejected by its argument's value
    /// parser and left out.
    #[error("Ignoring value '{value}' for '{setting}' from {origin}")]
    InvalidValue {
        /// Id of the argument that rejected the value.
        setting: String,
        /// The rejected raw value.
        value: String,
        /// Source that supplied the value.
        origin: Origin,
        /// The parser's verdict.
        #[source]
        source: Box<clap::Error>,
    },

    /// The operator did not accept the resolved configuration.
    #[error("Aborted. Flag configuration not accepted by user.")]
    ConfirmationDeclined,
}
