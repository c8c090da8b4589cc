//! Layered defaults for `clap` commands.
//!
//! `flag_strata` fills in the defaults of a [`clap::Command`] from, in
//! increasing precedence:
//!
//! 1. the defaults written in code,
//! 2. an ordered list of YAML or JSON configuration files, by default
//!    `~/.flagconf/<prefix>.yml`,
//! 3. environment variables named `<prefix><setting>`,
//!
//! and then parses the command line, which always has the last word.
//!
//! ```rust,no_run
//! use clap::{Arg, Command};
//! use flag_strata::{Prefix, ResolveOptions, try_resolve};
//!
//! # fn main() -> flag_strata::StrataResult<()> {
//! let mut cmd = Command::new("app")
//!     .arg(Arg::new("envflag").long("envflag").default_value("defaultvalue"));
//! // `MYAPP_envflag=testvalue app` prints "testvalue".
//! let resolution = try_resolve(
//!     &Prefix::new("MYAPP_"),
//!     &ResolveOptions::new(),
//!     std::slice::from_mut(&mut cmd),
//! )?;
//! if let Some(value) = resolution.primary().get_one::<String>("envflag") {
//!     println!("{value}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Files that exist but cannot be read are skipped with a `tracing` warning
//! and reported through [`Resolution::warnings`].

use std::sync::Arc;

mod apply;
pub mod confirm;
mod error;
mod map;
mod options;
mod prefix;
mod resolve;
mod result_ext;
mod source;

pub use apply::{CONFIG_FILE_ID, CONFIRM_ID, apply, register_internal_args};
pub use error::{StrataError, is_display_request};
pub use map::{Origin, ResolvedMap, ResolvedValue};
pub use options::{DEFAULT_CONFIG_DIR, FileList, ResolveOptions, user_home};
pub use prefix::Prefix;
pub use resolve::{
    Resolution, merge_sources, resolve, try_resolve, try_resolve_from, try_resolve_from_with_io,
};
pub use result_ext::StrataResultExt;
pub use source::{PrefixStrip, env_key, read_env, read_env_vars, read_file, read_files};

/// Result alias used throughout the crate.
pub type StrataResult<T> = Result<T, Arc<StrataError>>;
