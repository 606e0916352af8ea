//! Observability utilities.

use std::sync::OnceLock;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::types::ObservabilityConfig;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

const FALLBACK_LEVEL: &str = "info";

/// Initialize tracing subscriber once for the process.
///
/// Logs go to stderr so they never mix with prompt answers on stdin/stdout.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &ObservabilityConfig) {
    TRACING_INIT.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(config));

        let result = if config.json_logs {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });
}

/// Filter from the configured level; anything unparsable falls back to `info`.
///
/// A bare word must be a level name. Directive lists (`target=level,...`)
/// go through the `EnvFilter` parser.
fn configured_filter(config: &ObservabilityConfig) -> EnvFilter {
    let level = config.log_level.trim();
    let parsed = if level.contains('=') || level.contains(',') {
        EnvFilter::try_new(level).map_err(|err| err.to_string())
    } else {
        level
            .parse::<LevelFilter>()
            .map(|filter| EnvFilter::new(filter.to_string()))
            .map_err(|err| err.to_string())
    };

    parsed.unwrap_or_else(|err| {
        eprintln!("invalid log_level '{level}' ({err}), using {FALLBACK_LEVEL}");
        EnvFilter::new(FALLBACK_LEVEL)
    })
}
