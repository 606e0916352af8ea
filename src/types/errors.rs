//! Application error types.
//!
//! Errors only occur at the fallible edges of the crate (prompt I/O and
//! configuration loading). The guard itself never returns one.

use std::path::PathBuf;
use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the guard crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Config file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Internal errors (poisoned locks and the like).
    #[error("internal error: {0}")]
    Internal(String),

    /// TOML deserialization errors.
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit code used by the CLI binary when this error aborts the run.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) | Error::Toml(_) => 2,
            Error::ConfigRead { .. } | Error::Internal(_) | Error::Io(_) => 3,
        }
    }
}

// Convenience constructors
impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
