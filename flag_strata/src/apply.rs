//! Applying a [`ResolvedMap`] onto a `clap::Command`.
//!
//! A resolved value replaces the argument's default rather than a parsed
//! value, so anything given on the command line still wins and the
//! argument's own value parser performs type coercion.

use std::ffi::OsString;
use std::iter;
use std::path::PathBuf;
use std::sync::Arc;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::{ResolvedMap, ResolvedValue, StrataError};

/// Id of the internal setting naming an extra configuration file.
pub const CONFIG_FILE_ID: &str = "strata_file";

/// Id of the internal setting that turns on the confirmation prompt.
pub const CONFIRM_ID: &str = "strata_confirm";

/// Add the internal `strata_file` and `strata_confirm` settings to `cmd`.
///
/// Settings the command already defines, by id or long flag, are left
/// alone, so repeated calls are harmless.
pub fn register_internal_args(cmd: &mut Command) {
    if !defines(cmd, CONFIG_FILE_ID, "strata-file") {
        *cmd = std::mem::take(cmd).arg(
            Arg::new(CONFIG_FILE_ID)
                .long("strata-file")
                .value_name("PATH")
                .help("Read an additional configuration file with the highest file precedence"),
        );
    }
    if !defines(cmd, CONFIRM_ID, "strata-confirm") {
        *cmd = std::mem::take(cmd).arg(
            Arg::new(CONFIRM_ID)
                .long("strata-confirm")
                .action(ArgAction::SetTrue)
                .help("Require confirmation of the resolved flag configuration"),
        );
    }
}

fn defines(cmd: &Command, id: &str, long: &str) -> bool {
    cmd.get_arguments()
        .any(|arg| arg.get_id().as_str() == id || arg.get_long() == Some(long))
}

/// Whether `arg` is one of clap's generated help or version flags.
pub(crate) fn is_builtin(arg: &Arg) -> bool {
    matches!(
        arg.get_action(),
        ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
    )
}

fn lookup<'m>(map: &'m ResolvedMap, arg: &Arg) -> Option<&'m ResolvedValue> {
    map.get(arg.get_id().as_str())
        .or_else(|| arg.get_long().and_then(|long| map.get(long)))
}

/// Overwrite the default of every argument of `cmd` that has an entry in
/// `map`, returning how many were updated.
///
/// Arguments are matched by id first and by long flag name second.
/// Arguments using [`ArgAction::Append`] receive the value split on commas.
/// Arguments absent from `map` keep their existing default. An argument
/// that receives a value is no longer required, since the layered value
/// already supplies it.
///
/// A value rejected by the argument's value parser is logged, pushed onto
/// `warnings` as [`StrataError::InvalidValue`] and skipped; that argument
/// keeps its previous default and the other entries still apply.
///
/// `cmd` should not have been built yet; the resolution entry points only
/// ever parse clones of it.
pub fn apply(
    map: &ResolvedMap,
    cmd: &mut Command,
    warnings: &mut Vec<Arc<StrataError>>,
) -> usize {
    let mut built = cmd.clone();
    built.build();
    let mut updates = Vec::new();
    for arg in built.get_arguments().filter(|arg| !is_builtin(arg)) {
        let Some(entry) = lookup(map, arg) else {
            continue;
        };
        let id = arg.get_id().as_str().to_owned();
        let values = split_values(arg, &entry.value);
        if let Err(err) = check_values(cmd.get_name(), arg, &values) {
            let rejected = StrataError::InvalidValue {
                setting: id,
                value: entry.value.clone(),
                origin: entry.origin.clone(),
                source: Box::new(err),
            };
            tracing::warn!(
                command = cmd.get_name(),
                error = %rejected,
                "skipping layered value"
            );
            warnings.push(Arc::new(rejected));
            continue;
        }
        updates.push((id, entry, values));
    }

    let applied = updates.len();
    for (id, entry, values) in updates {
        tracing::debug!(
            command = cmd.get_name(),
            setting = %id,
            origin = %entry.origin,
            "applying layered default"
        );
        *cmd = std::mem::take(cmd)
            .mut_arg(&id, |arg| arg.default_values(values).required(false));
    }
    applied
}

fn split_values(arg: &Arg, value: &str) -> Vec<String> {
    if matches!(arg.get_action(), ArgAction::Append) {
        value.split(',').map(|part| part.trim().to_owned()).collect()
    } else {
        vec![value.to_owned()]
    }
}

/// Run `values` through the value parser of the built `arg`.
///
/// clap asserts on invalid defaults while building in debug builds, so the
/// values are parsed here, as positionals of a single-argument command.
fn check_values(name: &str, arg: &Arg, values: &[String]) -> Result<(), clap::Error> {
    let checker = Command::new(name.to_owned()).no_binary_name(true).arg(
        Arg::new(arg.get_id().clone())
            .num_args(1..)
            .action(ArgAction::Append)
            .allow_hyphen_values(true)
            .value_parser(arg.get_value_parser().clone()),
    );
    let raw = iter::once(OsString::from("--")).chain(values.iter().map(OsString::from));
    checker.try_get_matches_from(raw)?;
    Ok(())
}

/// Find a `--strata-file` given on the command line without failing on any
/// other argument problem; those are reported by the real parse later.
pub(crate) fn config_file_from_args(cmd: &Command, args: &[OsString]) -> Option<PathBuf> {
    let matches = cmd
        .clone()
        .ignore_errors(true)
        .try_get_matches_from(args)
        .ok()?;
    if matches.value_source(CONFIG_FILE_ID) != Some(ValueSource::CommandLine) {
        return None;
    }
    first_raw(&matches, CONFIG_FILE_ID).map(PathBuf::from)
}

fn first_raw(matches: &ArgMatches, id: &str) -> Option<OsString> {
    matches
        .try_get_raw(id)
        .ok()
        .flatten()?
        .next()
        .map(ToOwned::to_owned)
}

/// Whether the `strata_confirm` setting ended up true in `matches`.
pub(crate) fn confirmation_requested(matches: &ArgMatches) -> bool {
    matches
        .try_get_one::<bool>(CONFIRM_ID)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}
