//! The resolution pipeline: sources, defaults, argument parsing and the
//! optional confirmation gate.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::iter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{ArgMatches, Command, FromArgMatches};

use crate::apply::{
    CONFIG_FILE_ID, apply, config_file_from_args, confirmation_requested, register_internal_args,
};
use crate::confirm::confirm_with;
use crate::{
    Prefix, ResolveOptions, ResolvedMap, StrataError, StrataResult, StrataResultExt, read_env,
    read_files,
};

/// Outcome of a successful resolution call.
#[derive(Debug)]
pub struct Resolution {
    primary: ArgMatches,
    secondary: Vec<ArgMatches>,
    resolved: ResolvedMap,
    warnings: Vec<Arc<StrataError>>,
}

impl Resolution {
    /// Matches of the first group, parsed from the real command line.
    #[must_use]
    pub const fn primary(&self) -> &ArgMatches {
        &self.primary
    }

    /// Matches of the remaining groups, in the order they were supplied.
    #[must_use]
    pub fn secondary(&self) -> &[ArgMatches] {
        &self.secondary
    }

    /// Matches of every group, first group first.
    pub fn matches(&self) -> impl Iterator<Item = &ArgMatches> {
        iter::once(&self.primary).chain(&self.secondary)
    }

    /// The merged file and environment values that were applied.
    #[must_use]
    pub const fn resolved(&self) -> &ResolvedMap {
        &self.resolved
    }

    /// Files that existed but could not be used, and layered values their
    /// arguments rejected.
    #[must_use]
    pub fn warnings(&self) -> &[Arc<StrataError>] {
        &self.warnings
    }

    /// Build a `clap` derive type from the primary matches.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::CliParsing`] when the matches do not fit `T`.
    pub fn extract<T: FromArgMatches>(&self) -> StrataResult<T> {
        T::from_arg_matches(&self.primary).into_strata()
    }
}

/// Merge the file list and the environment for one resolution pass.
///
/// Files are read in order, then the extra configuration file, if any, then
/// the environment. The extra file is `config_override` when given, or else
/// the value of the `<prefix>strata_file` environment variable. File
/// failures are logged and appended to `warnings`.
pub fn merge_sources(
    prefix: &Prefix,
    options: &ResolveOptions,
    config_override: Option<&Path>,
    warnings: &mut Vec<Arc<StrataError>>,
) -> ResolvedMap {
    let files = options.file_list(prefix);
    let mut resolved = ResolvedMap::new();
    read_files(prefix, files.iter(), &mut resolved, warnings);

    let mut env = ResolvedMap::new();
    read_env(prefix, options.prefix_strip(), &mut env);

    let extra = config_override.map(Path::to_path_buf).or_else(|| {
        env.value(CONFIG_FILE_ID)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    });
    if let Some(path) = extra {
        tracing::debug!(path = %path.display(), "reading extra configuration file");
        read_files(prefix, iter::once(path.as_path()), &mut resolved, warnings);
    }

    resolved.overlay(env);
    resolved
}

/// Resolve `groups` against the process arguments.
///
/// See [`try_resolve_from`].
///
/// # Errors
///
/// As for [`try_resolve_from`].
pub fn try_resolve(
    prefix: &Prefix,
    options: &ResolveOptions,
    groups: &mut [Command],
) -> StrataResult<Resolution> {
    try_resolve_from(prefix, options, groups, std::env::args_os())
}

/// Resolve `groups` against `args`, prompting on stdin and stderr when
/// confirmation is required.
///
/// See [`try_resolve_from_with_io`].
///
/// # Errors
///
/// As for [`try_resolve_from_with_io`].
pub fn try_resolve_from<I, T>(
    prefix: &Prefix,
    options: &ResolveOptions,
    groups: &mut [Command],
    args: I,
) -> StrataResult<Resolution>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    try_resolve_from_with_io(
        prefix,
        options,
        groups,
        args,
        io::stdin().lock(),
        io::stderr().lock(),
    )
}

/// Resolve layered defaults for every group, then parse the arguments.
///
/// Each group gets the internal `strata_file` and `strata_confirm` settings,
/// then the defaults merged from files and environment. `args` are parsed
/// against the first group only, after every group has been updated. Any
/// further group is parsed from the program name alone, so it reflects
/// defaults, files and environment. Without groups an implicit command
/// holding only the internal settings is used. Values an argument rejects
/// are skipped and reported through [`Resolution::warnings`].
///
/// When confirmation is required by `options` or by any group's
/// `strata_confirm`, the settings are printed to `output` and an answer is
/// read from `input`.
///
/// # Errors
///
/// Returns [`StrataError::CliParsing`] when argument parsing fails, including
/// requests for help or version output, and
/// [`StrataError::ConfirmationDeclined`] when the operator does not confirm.
pub fn try_resolve_from_with_io<I, T, R, W>(
    prefix: &Prefix,
    options: &ResolveOptions,
    groups: &mut [Command],
    args: I,
    input: R,
    output: W,
) -> StrataResult<Resolution>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    R: BufRead,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match groups.split_first_mut() {
        Some((first, rest)) => resolve_groups(prefix, options, first, rest, &args, input, output),
        None => {
            let mut implicit = implicit_group(prefix);
            resolve_groups(prefix, options, &mut implicit, &mut [], &args, input, output)
        }
    }
}

fn implicit_group(prefix: &Prefix) -> Command {
    let name = prefix.as_str().trim_end_matches('_');
    if name.is_empty() {
        Command::new("flag-strata")
    } else {
        Command::new(name.to_ascii_lowercase())
    }
}

fn resolve_groups<R: BufRead, W: Write>(
    prefix: &Prefix,
    options: &ResolveOptions,
    first: &mut Command,
    rest: &mut [Command],
    args: &[OsString],
    input: R,
    output: W,
) -> StrataResult<Resolution> {
    register_internal_args(first);
    rest.iter_mut().for_each(register_internal_args);

    let config_override = config_file_from_args(first, args);
    let mut warnings = Vec::new();
    let resolved = merge_sources(prefix, options, config_override.as_deref(), &mut warnings);
    for group in iter::once(&mut *first).chain(rest.iter_mut()) {
        let applied = apply(&resolved, group, &mut warnings);
        tracing::debug!(command = group.get_name(), applied, "applied layered defaults");
    }

    // Parse clones so the groups stay unbuilt and accept new defaults on the
    // next pass.
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| OsString::from(first.get_name()));
    let primary = first.clone().try_get_matches_from(args).into_strata()?;
    let secondary = rest
        .iter()
        .map(|group| group.clone().try_get_matches_from([program.clone()]))
        .collect::<Result<Vec<_>, _>>()
        .into_strata()?;

    let required = options.requires_confirmation()
        || iter::once(&primary)
            .chain(&secondary)
            .any(confirmation_requested);
    if required {
        let groups: Vec<(&Command, &ArgMatches)> = iter::once(&*first)
            .chain(rest.iter())
            .zip(iter::once(&primary).chain(&secondary))
            .collect();
        if !confirm_with(&groups, input, output) {
            return Err(Arc::new(StrataError::ConfirmationDeclined));
        }
    }

    Ok(Resolution {
        primary,
        secondary,
        resolved,
        warnings,
    })
}

/// Resolve `groups` against the process arguments, exiting on failure.
///
/// Argument errors exit through [`clap::Error::exit`], so `--help` and
/// `--version` still exit successfully. A declined or unreadable
/// confirmation is logged and exits with status 1.
///
/// # Examples
///
/// ```rust,no_run
/// use clap::{Arg, Command};
/// use flag_strata::{Prefix, ResolveOptions, resolve};
///
/// let mut cmd = Command::new("app").arg(Arg::new("port").long("port").default_value("80"));
/// let resolution = resolve(
///     &Prefix::new("APP_"),
///     &ResolveOptions::new(),
///     std::slice::from_mut(&mut cmd),
/// );
/// let port = resolution.primary().get_one::<String>("port");
/// # let _ = port;
/// ```
pub fn resolve(prefix: &Prefix, options: &ResolveOptions, groups: &mut [Command]) -> Resolution {
    match try_resolve(prefix, options, groups) {
        Ok(resolution) => resolution,
        Err(err) => {
            if let StrataError::CliParsing(clap_err) = err.as_ref() {
                clap_err.exit();
            }
            tracing::error!(error = %err, "flag resolution aborted");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                tracing::debug!(error = %write_err, "could not report abort on stderr");
            }
            std::process::exit(1);
        }
    }
}
