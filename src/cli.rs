//! Command-line flow behind the `empty-guard` binary.
//!
//! Argument parsing stays in the binary; this module resolves configuration
//! and runs the guard over injected input/output so exit codes are testable.
//!
//! Exit codes:
//! - 0: the action may proceed
//! - 1: the action must be aborted
//! - 2: configuration error
//! - 3: config file unreadable, or another I/O or internal error

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::guard::ConfirmEmptyValueGuard;
use crate::prompt::TerminalPrompt;
use crate::types::{Config, Language, Result};

pub const EXIT_PROCEED: u8 = 0;
pub const EXIT_ABORT: u8 = 1;

/// Parsed command-line options.
#[derive(Debug, Clone, Default)]
pub struct CliOptions {
    /// Prompt language; overrides config file and environment.
    pub language: Option<Language>,
    /// Confirm empty-like values without asking.
    pub assume_yes: bool,
    /// TOML configuration file.
    pub config: Option<PathBuf>,
    /// Field values affected by the pending action.
    pub values: Vec<String>,
}

/// Resolve configuration: file, then environment, then command-line flags.
pub fn load_config<F>(options: &CliOptions, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut config = config.apply_env_from(lookup)?;

    if let Some(language) = options.language {
        config.guard.language = language;
    }
    if options.assume_yes {
        config.guard.assume_yes = true;
    }
    Ok(config)
}

/// Guard `values` as one action, prompting on `input`/`output`.
pub fn execute<R, W>(config: &Config, values: &[String], input: R, output: W) -> u8
where
    R: BufRead,
    W: Write,
{
    tracing::debug!(
        language = %config.guard.language,
        values = values.len(),
        "guard starting"
    );

    let prompt = TerminalPrompt::new(config.guard.language, input, output);
    let guard = ConfirmEmptyValueGuard::from_config(prompt, &config.guard);

    if guard.should_proceed_all(values) {
        EXIT_PROCEED
    } else {
        tracing::info!("action aborted by user");
        EXIT_ABORT
    }
}

/// Load configuration and guard the values; errors are reported on `output`.
///
/// `on_config` runs once the configuration is resolved, before any prompt
/// (the binary installs its log subscriber there).
pub fn run<F, R, W, I>(
    options: &CliOptions,
    lookup: F,
    input: R,
    mut output: W,
    on_config: I,
) -> u8
where
    F: Fn(&str) -> Option<String>,
    R: BufRead,
    W: Write,
    I: FnOnce(&Config),
{
    match load_config(options, lookup) {
        Ok(config) => {
            on_config(&config);
            execute(&config, &options.values, input, output)
        }
        Err(err) => {
            // Nothing left to report to if the error stream itself is gone.
            let _ = writeln!(output, "empty-guard: {err}");
            err.exit_code()
        }
    }
}
