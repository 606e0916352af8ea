//! empty-guard - terminal entry point.
//!
//! Evaluates the given field values as one pending action and asks for
//! confirmation on the terminal if any of them is empty-like. See
//! [`empty_guard::cli`] for the exit codes.

use clap::Parser;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use empty_guard::cli::{self, CliOptions};
use empty_guard::Language;

#[derive(Debug, Parser)]
#[command(name = "empty-guard", version, about)]
struct Args {
    /// Prompt language (de, en). Overrides config file and environment.
    #[arg(long)]
    lang: Option<Language>,

    /// Confirm empty-like values without asking.
    #[arg(long, short = 'y')]
    yes: bool,

    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Field values affected by the pending action.
    #[arg(required = true, allow_hyphen_values = true)]
    values: Vec<String>,
}

impl From<Args> for CliOptions {
    fn from(args: Args) -> Self {
        Self {
            language: args.lang,
            assume_yes: args.yes,
            config: args.config,
            values: args.values,
        }
    }
}

fn main() -> ExitCode {
    let options = CliOptions::from(Args::parse());

    let code = cli::run(
        &options,
        |key| std::env::var(key).ok(),
        BufReader::new(io::stdin()),
        io::stderr(),
        |config| empty_guard::observability::init_tracing(&config.observability),
    );
    ExitCode::from(code)
}
