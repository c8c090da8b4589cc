//! Demo entry point: resolve layered flag defaults, then print a greeting.
//!
//! Try `STRATA_DEMO_recipient=Ferris strata_demo` or put
//! `salutation: Howdy` into `~/.flagconf/STRATA_DEMO_.yml`.

use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use flag_strata::{Prefix, ResolveOptions, resolve};
use tracing_subscriber::EnvFilter;

const PREFIX: &str = "STRATA_DEMO_";

/// Greets somebody using values from files, environment or flags.
#[derive(Debug, Parser)]
#[command(name = "strata_demo", version)]
struct Cli {
    /// Who to greet.
    #[arg(long, default_value = "World")]
    recipient: String,
    /// Greeting word.
    #[arg(long, default_value = "Hello")]
    salutation: String,
    /// Shout the greeting.
    #[arg(long)]
    excited: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut cmd = Cli::command();
    let resolution = resolve(
        &Prefix::new(PREFIX),
        &ResolveOptions::new(),
        std::slice::from_mut(&mut cmd),
    );
    for warning in resolution.warnings() {
        tracing::warn!(%warning, "configuration source ignored");
    }
    let cli: Cli = resolution.extract()?;
    writeln!(io::stdout().lock(), "{}", greeting(&cli))?;
    Ok(())
}

fn greeting(cli: &Cli) -> String {
    let punctuation = if cli.excited { "!" } else { "." };
    let text = format!("{}, {}{punctuation}", cli.salutation, cli.recipient);
    if cli.excited {
        text.to_uppercase()
    } else {
        text
    }
}
