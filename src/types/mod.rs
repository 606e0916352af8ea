//! Core types for the guard.
//!
//! This module provides foundational types used throughout the crate:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures loaded from TOML and the environment
//! - **Language**: Prompt language and its answer conventions

mod config;
mod errors;
mod language;

pub use config::{
    Config, GuardConfig, ObservabilityConfig, ENV_ASSUME_YES, ENV_LANG, ENV_LOG_FORMAT,
};
pub use errors::{Error, Result};
pub use language::Language;
