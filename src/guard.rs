//! Confirmation guard for empty-like field values.
//!
//! Called immediately before a destructive or state-changing action. If the
//! field value is one of the sentinels (`""`, `"None"`, `"NULL"`) the user is
//! asked once to confirm; any other value lets the action proceed without a
//! prompt. The caller aborts the action on `false`.
//!
//! ```
//! use empty_guard::{ConfirmEmptyValueGuard, FixedAnswer, Language};
//!
//! let guard = ConfirmEmptyValueGuard::new(FixedAnswer(false), Language::English);
//! assert!(guard.should_proceed("Meier"));
//! assert!(!guard.should_proceed("NULL"));
//! ```

use serde::Serialize;

use crate::prompt::ConfirmationPrompt;
use crate::sentinel::{classify, ValueKind};
use crate::types::{GuardConfig, Language};

/// Result of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Classification of the inspected value.
    pub kind: ValueKind,
    /// Whether the user was actually asked.
    pub prompted: bool,
    /// Whether the pending action may proceed.
    pub proceed: bool,
}

impl Evaluation {
    fn passthrough(kind: ValueKind) -> Self {
        Self {
            kind,
            prompted: false,
            proceed: true,
        }
    }

    /// Whether the value required a confirmation (asked or assumed).
    pub fn required_confirmation(&self) -> bool {
        self.kind.is_empty_like()
    }
}

/// Asks for confirmation before an empty-like value is submitted.
///
/// Stateless between calls. The prompt capability is injected so the
/// decision logic runs the same under a terminal, a UI dialog or a test.
#[derive(Debug, Clone)]
pub struct ConfirmEmptyValueGuard<P> {
    prompt: P,
    language: Language,
    assume_yes: bool,
}

impl<P: ConfirmationPrompt> ConfirmEmptyValueGuard<P> {
    pub fn new(prompt: P, language: Language) -> Self {
        Self {
            prompt,
            language,
            assume_yes: false,
        }
    }

    /// Build a guard from the `[guard]` configuration section.
    pub fn from_config(prompt: P, config: &GuardConfig) -> Self {
        Self::new(prompt, config.language).with_assume_yes(config.assume_yes)
    }

    /// Confirm empty-like values without invoking the prompt.
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The localized text shown when confirmation is required.
    pub fn message(&self) -> &'static str {
        self.language.delete_confirmation()
    }

    /// Decide whether the pending action may proceed for `value`.
    pub fn should_proceed(&self, value: &str) -> bool {
        self.evaluate(value).proceed
    }

    /// Same decision as [`should_proceed`](Self::should_proceed), with details.
    pub fn evaluate(&self, value: &str) -> Evaluation {
        let kind = classify(value);
        if !kind.is_empty_like() {
            tracing::debug!(?kind, "value present, no confirmation needed");
            return Evaluation::passthrough(kind);
        }

        let (prompted, proceed) = self.ask();
        tracing::debug!(?kind, prompted, proceed, "empty-like value evaluated");
        Evaluation {
            kind,
            prompted,
            proceed,
        }
    }

    /// Guard one action that touches several selected values.
    ///
    /// Prompts at most once, and only if at least one value is empty-like.
    pub fn should_proceed_all<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let empty_like = values
            .into_iter()
            .filter(|value| classify(value.as_ref()).is_empty_like())
            .count();
        if empty_like == 0 {
            return true;
        }

        let (prompted, proceed) = self.ask();
        tracing::debug!(empty_like, prompted, proceed, "batch evaluated");
        proceed
    }

    /// Returns `(prompted, confirmed)`. Prompt failures count as a decline.
    fn ask(&self) -> (bool, bool) {
        if self.assume_yes {
            tracing::info!("confirmation assumed for empty-like value");
            return (false, true);
        }

        match self.prompt.confirm(self.message()) {
            Ok(confirmed) => (true, confirmed),
            Err(err) => {
                tracing::warn!(error = %err, "confirmation prompt failed, blocking action");
                (true, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{FixedAnswer, MockConfirmationPrompt};
    use crate::types::Error;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    fn expect_prompts(count: usize, answer: bool) -> MockConfirmationPrompt {
        let mut mock = MockConfirmationPrompt::new();
        mock.expect_confirm()
            .times(count)
            .returning(move |_| Ok(answer));
        mock
    }

    #[test]
    fn test_present_value_skips_prompt() {
        let guard = ConfirmEmptyValueGuard::new(expect_prompts(0, false), Language::German);
        assert!(guard.should_proceed("Meier"));
        assert!(guard.should_proceed("0"));
    }

    #[test]
    fn test_sentinels_prompt_and_follow_answer() {
        for value in ["", "None", "NULL"] {
            let confirmed = ConfirmEmptyValueGuard::new(expect_prompts(1, true), Language::German);
            assert!(confirmed.should_proceed(value), "{value:?}");

            let declined = ConfirmEmptyValueGuard::new(expect_prompts(1, false), Language::German);
            assert!(!declined.should_proceed(value), "{value:?}");
        }
    }

    #[test]
    fn test_lowercase_tokens_are_not_sentinels() {
        let guard = ConfirmEmptyValueGuard::new(expect_prompts(0, false), Language::German);
        assert!(guard.should_proceed("none"));
        assert!(guard.should_proceed("null"));
    }

    #[test]
    fn test_prompt_receives_localized_message() {
        let mut mock = MockConfirmationPrompt::new();
        mock.expect_confirm()
            .withf(|message| {
                message.to_string() == "Are you sure you want to delete the selected values?"
            })
            .times(1)
            .returning(|_| Ok(true));

        let guard = ConfirmEmptyValueGuard::new(mock, Language::English);
        assert!(guard.should_proceed("None"));
    }

    #[test]
    fn test_evaluate_reports_details() {
        let guard = ConfirmEmptyValueGuard::new(FixedAnswer(true), Language::German);

        let eval = guard.evaluate("NULL");
        assert_eq!(
            eval,
            Evaluation {
                kind: ValueKind::NullToken,
                prompted: true,
                proceed: true,
            }
        );
        assert!(eval.required_confirmation());

        let eval = guard.evaluate(" ");
        assert_eq!(eval.kind, ValueKind::Present);
        assert!(!eval.prompted);
        assert!(eval.proceed);
        assert!(!eval.required_confirmation());
    }

    #[test]
    #[traced_test]
    fn test_prompt_failure_blocks_action() {
        let mut mock = MockConfirmationPrompt::new();
        mock.expect_confirm()
            .times(1)
            .returning(|_| Err(Error::internal("dialog closed")));

        let guard = ConfirmEmptyValueGuard::new(mock, Language::German);
        let eval = guard.evaluate("");
        assert!(eval.prompted);
        assert!(!eval.proceed);
        assert!(logs_contain("confirmation prompt failed"));
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let guard = ConfirmEmptyValueGuard::new(expect_prompts(0, false), Language::German)
            .with_assume_yes(true);

        let eval = guard.evaluate("None");
        assert!(eval.proceed);
        assert!(!eval.prompted);
        assert!(eval.required_confirmation());
    }

    #[test]
    fn test_from_config() {
        let config = GuardConfig {
            language: Language::English,
            assume_yes: true,
        };
        let guard = ConfirmEmptyValueGuard::from_config(expect_prompts(0, false), &config);
        assert_eq!(guard.language(), Language::English);
        assert!(guard.should_proceed(""));
    }

    #[test]
    fn test_batch_prompts_once() {
        let guard = ConfirmEmptyValueGuard::new(expect_prompts(1, false), Language::German);
        assert!(!guard.should_proceed_all(["Meier", "", "NULL", "None"]));
    }

    #[test]
    fn test_batch_without_sentinels() {
        let guard = ConfirmEmptyValueGuard::new(expect_prompts(0, false), Language::German);
        assert!(guard.should_proceed_all(["Meier", "1.3", " "]));
        assert!(guard.should_proceed_all(Vec::<String>::new()));
    }

    #[test]
    fn test_guard_is_stateless() {
        let guard = ConfirmEmptyValueGuard::new(expect_prompts(3, true), Language::German);
        for _ in 0..3 {
            assert!(guard.should_proceed("NULL"));
            assert!(guard.should_proceed("x"));
        }
    }

    proptest! {
        #[test]
        fn prop_non_sentinels_never_prompt(value in ".*") {
            prop_assume!(!["", "None", "NULL"].contains(&value.as_str()));
            let guard = ConfirmEmptyValueGuard::new(FixedAnswer(false), Language::German);
            let eval = guard.evaluate(&value);
            prop_assert!(eval.proceed);
            prop_assert!(!eval.prompted);
        }

        #[test]
        fn prop_at_most_one_prompt(
            value in prop_oneof![
                Just(String::new()),
                Just("None".to_string()),
                Just("NULL".to_string()),
                ".*"
            ]
        ) {
            let calls = std::cell::Cell::new(0u32);
            let prompt = crate::prompt::FnPrompt(|_: &str| {
                calls.set(calls.get() + 1);
                true
            });
            let guard = ConfirmEmptyValueGuard::new(prompt, Language::German);
            prop_assert!(guard.should_proceed(&value));
            prop_assert!(calls.get() <= 1);
        }
    }
}
