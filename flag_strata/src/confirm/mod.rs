//! Interactive confirmation of the resolved flag configuration.

use std::ffi::OsStr;
use std::io::{self, BufRead, Write};

use clap::{ArgMatches, Command};

use crate::apply::is_builtin;

/// Question written after the summary of resolved values.
pub const PROMPT: &str = "Proceed with the above flag configuration ? (yes/[no]) ";

/// Print every setting of `groups` with its resolved value to stderr and
/// ask the operator on stdin whether to continue.
///
/// Returns `false` unless the answer is `y` or `yes` in any case.
#[must_use]
pub fn confirm(groups: &[(&Command, &ArgMatches)]) -> bool {
    confirm_with(groups, io::stdin().lock(), io::stderr().lock())
}

/// [`confirm`] over arbitrary streams.
///
/// Writes one `\t<name> = <value>` line per setting, a blank line, then
/// [`PROMPT`], and reads a single line of `input`. Write failures, end of
/// input and read failures all count as a refusal.
#[must_use]
pub fn confirm_with<R, W>(groups: &[(&Command, &ArgMatches)], mut input: R, mut output: W) -> bool
where
    R: BufRead,
    W: Write,
{
    if let Err(err) = write_summary(groups, &mut output) {
        tracing::warn!(error = %err, "could not print flag configuration");
        return false;
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(0) => false,
        Ok(_) => is_affirmative(&answer),
        Err(err) => {
            tracing::warn!(error = %err, "could not read confirmation");
            false
        }
    }
}

fn write_summary<W: Write>(groups: &[(&Command, &ArgMatches)], output: &mut W) -> io::Result<()> {
    for (cmd, matches) in groups {
        for arg in cmd.get_arguments().filter(|arg| !is_builtin(arg)) {
            let id = arg.get_id().as_str();
            writeln!(output, "\t{id} = {}", render(matches, id))?;
        }
    }
    write!(output, "\n{PROMPT}")?;
    output.flush()
}

fn render(matches: &ArgMatches, id: &str) -> String {
    matches
        .try_get_raw(id)
        .ok()
        .flatten()
        .map(|values| {
            values
                .map(OsStr::to_string_lossy)
                .collect::<Vec<_>>()
                .join(",")
        })
        .unwrap_or_default()
}

/// Whether `answer` is `y` or `yes`, ignoring case and surrounding
/// whitespace.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let trimmed = answer.trim();
    trimmed.eq_ignore_ascii_case("y") || trimmed.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests;
