//! Conversions between external error types and `StrataError`.

use super::StrataError;

impl From<clap::Error> for StrataError {
    fn from(e: clap::Error) -> Self {
        Self::CliParsing(Box::new(e))
    }
}
