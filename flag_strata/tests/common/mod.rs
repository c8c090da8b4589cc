//! Shared helpers for the resolution integration tests.

use std::io::Cursor;

use anyhow::{Result, anyhow};
use clap::{Arg, ArgMatches, Command};
use flag_strata::{Prefix, ResolveOptions, Resolution, StrataResult, try_resolve_from_with_io};

pub(crate) const PREFIX: &str = "FLAGSTRATA_TEST_";

/// Run `f` inside a `figment::Jail`, translating errors both ways.
pub(crate) fn with_jail<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut figment::Jail) -> Result<()>,
{
    figment::Jail::try_with(|j| f(j).map_err(|err| figment::Error::from(err.to_string())))
        .map_err(|err| anyhow!(err))
}

/// A command with one string setting defaulting to `"defaultvalue"`.
pub(crate) fn string_group(name: &'static str) -> Command {
    Command::new("prog").arg(Arg::new(name).long(name).default_value("defaultvalue"))
}

/// Resolve `groups` against `args`, answering any prompt with `answer`.
pub(crate) fn resolve_with(
    options: &ResolveOptions,
    groups: &mut [Command],
    args: &[&str],
    answer: &str,
) -> StrataResult<Resolution> {
    let mut prompt = Vec::new();
    try_resolve_from_with_io(
        &Prefix::new(PREFIX),
        options,
        groups,
        args.iter().copied(),
        Cursor::new(answer.as_bytes().to_vec()),
        &mut prompt,
    )
}

/// Resolve a single group against `args`.
pub(crate) fn resolve_one(
    options: &ResolveOptions,
    group: Command,
    args: &[&str],
) -> Result<Resolution> {
    let mut groups = [group];
    resolve_with(options, &mut groups, args, "").map_err(|err| anyhow!(err))
}

/// The string value of `id`, if any.
pub(crate) fn string_value<'m>(matches: &'m ArgMatches, id: &str) -> Option<&'m str> {
    matches.get_one::<String>(id).map(String::as_str)
}
