//! Confirmation prompt capability.
//!
//! The guard never talks to a user directly. The hosting layer injects a
//! [`ConfirmationPrompt`] that performs the blocking interaction and reports
//! the user's answer.

use std::fmt;
use std::io::{BufRead, Write};
use std::sync::{Mutex, PoisonError};

use crate::types::{Error, Language, Result};

/// Blocking confirm/cancel interaction with the user.
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmationPrompt {
    /// Show `message` and wait for the answer. `Ok(true)` means confirmed.
    fn confirm(&self, message: &str) -> Result<bool>;
}

impl<P: ConfirmationPrompt + ?Sized> ConfirmationPrompt for &P {
    fn confirm(&self, message: &str) -> Result<bool> {
        (**self).confirm(message)
    }
}

impl<P: ConfirmationPrompt + ?Sized> ConfirmationPrompt for Box<P> {
    fn confirm(&self, message: &str) -> Result<bool> {
        (**self).confirm(message)
    }
}

// =============================================================================
// Terminal
// =============================================================================

/// Line-based prompt on a reader/writer pair.
///
/// Declining is the default: an empty line, any unrecognised answer and end
/// of input all count as "no".
pub struct TerminalPrompt<R, W> {
    language: Language,
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(language: Language, input: R, output: W) -> Self {
        Self {
            language,
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Take back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (
            self.input.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.output.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl<R: BufRead, W: Write> ConfirmationPrompt for TerminalPrompt<R, W> {
    fn confirm(&self, message: &str) -> Result<bool> {
        {
            let mut out = self
                .output
                .lock()
                .map_err(|_| Error::internal("prompt output lock poisoned"))?;
            write!(out, "{} {} ", message, self.language.answer_hint())?;
            out.flush()?;
        }

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .map_err(|_| Error::internal("prompt input lock poisoned"))?
            .read_line(&mut line)?;
        if read == 0 {
            tracing::debug!("end of input at confirmation prompt, declining");
            return Ok(false);
        }

        Ok(self.language.is_affirmative(&line))
    }
}

impl<R, W> fmt::Debug for TerminalPrompt<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalPrompt")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Scripted answers
// =============================================================================

/// Always gives the same answer without showing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl ConfirmationPrompt for FixedAnswer {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Adapts a closure supplied by a UI layer (e.g. a modal dialog).
pub struct FnPrompt<F>(pub F);

impl<F> ConfirmationPrompt for FnPrompt<F>
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> Result<bool> {
        Ok((self.0)(message))
    }
}

impl<F> fmt::Debug for FnPrompt<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnPrompt(..)")
    }
}
