//! Readers that turn configuration files and environment variables into a
//! [`ResolvedMap`](crate::ResolvedMap).

mod env;
mod file;
mod parser;
mod yaml;

pub use env::{PrefixStrip, env_key, read_env, read_env_vars};
pub use file::{read_file, read_files};
