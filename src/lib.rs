//! # Empty Guard - confirmation before clearing a field
//!
//! Text fields in data-editing forms use three literal values to mean "no
//! value": `""`, `"None"` and `"NULL"`. Submitting one of them clears the
//! stored value, so the action is guarded by an explicit confirmation:
//! - Exact, case-sensitive sentinel classification
//! - A stateless guard returning proceed/abort for the pending action
//! - An injected prompt capability (terminal, UI callback, scripted answer)
//! - German and English prompt text
//!
//! ## Flow
//!
//! ```text
//!   field value ──► classify ──► Present ──────────────► proceed
//!                       │
//!                       └──► Empty / None / NULL ──► prompt ──► confirm ─► proceed
//!                                                          └──► decline ─► abort
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod guard;
pub mod prompt;
pub mod sentinel;
pub mod types;

// Internal utilities
pub mod observability;

pub use guard::{ConfirmEmptyValueGuard, Evaluation};
pub use prompt::{ConfirmationPrompt, FixedAnswer, FnPrompt, TerminalPrompt};
pub use sentinel::{classify, is_empty_like, FieldValue, ValueKind, SENTINELS};
pub use types::{Config, Error, Language, Result};
