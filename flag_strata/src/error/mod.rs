//! Error types produced while resolving layered flag defaults.

mod constructors;
mod conversions;
mod helpers;
mod types;

pub use helpers::is_display_request;
pub use types::StrataError;

pub(crate) use constructors::{file_error, invalid_data};
