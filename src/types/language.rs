//! Prompt language.
//!
//! Controls the text of the confirmation prompt and which answers count as
//! a confirmation on the terminal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Error;

/// Supported prompt languages.
///
/// Config files, the environment and the command line all parse through
/// [`FromStr`], so the same codes are accepted everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    /// German (default form language).
    #[default]
    #[serde(rename = "de")]
    German,
    /// English.
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn to_code(self) -> &'static str {
        match self {
            Language::German => "de",
            Language::English => "en",
        }
    }

    /// Message shown before a field is cleared.
    pub fn delete_confirmation(self) -> &'static str {
        match self {
            Language::German => "Sind Sie sicher, dass Sie die ausgewählten Werte löschen wollen?",
            Language::English => "Are you sure you want to delete the selected values?",
        }
    }

    /// Answer hint appended to the prompt on a terminal. Declining is the default.
    pub fn answer_hint(self) -> &'static str {
        match self {
            Language::German => "[j/N]",
            Language::English => "[y/N]",
        }
    }

    /// Whether a typed answer counts as a confirmation.
    ///
    /// German accepts the English answers as well.
    pub fn is_affirmative(self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        match self {
            Language::German => matches!(answer.as_str(), "j" | "ja" | "y" | "yes"),
            Language::English => matches!(answer.as_str(), "y" | "yes"),
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "de" | "deutsch" | "german" => Ok(Language::German),
            other => Err(Error::config(format!(
                "unknown language '{}', expected de or en",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("de".parse::<Language>().unwrap(), Language::German);
        assert_eq!("Deutsch".parse::<Language>().unwrap(), Language::German);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" english ".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for code in ["fr", "eng", ""] {
            let err = code.parse::<Language>().unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{code:?}");
        }
    }

    #[test]
    fn test_display_round_trips() {
        for language in [Language::German, Language::English] {
            assert_eq!(language.to_string().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Language::English.delete_confirmation(),
            "Are you sure you want to delete the selected values?"
        );
        assert!(Language::German.delete_confirmation().starts_with("Sind Sie sicher"));
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(Language::German.is_affirmative("j"));
        assert!(Language::German.is_affirmative("Ja\n"));
        assert!(Language::German.is_affirmative("yes"));
        assert!(!Language::German.is_affirmative("nein"));
        assert!(!Language::German.is_affirmative(""));

        assert!(Language::English.is_affirmative("Y"));
        assert!(Language::English.is_affirmative(" yes "));
        assert!(!Language::English.is_affirmative("ja"));
        assert!(!Language::English.is_affirmative("no"));
    }

    #[test]
    fn test_serde_codes() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        #[derive(Serialize)]
        struct Written {
            language: Language,
        }
        let parsed: Wrapper = toml::from_str("language = \"en\"").unwrap();
        assert_eq!(parsed.language, Language::English);
        let parsed: Wrapper = toml::from_str("language = \"english\"").unwrap();
        assert_eq!(parsed.language, Language::English);
        let parsed: Wrapper = toml::from_str("language = \"Deutsch\"").unwrap();
        assert_eq!(parsed.language, Language::German);
        assert!(toml::from_str::<Wrapper>("language = \"eng\"").is_err());

        let serialized = toml::to_string(&Written {
            language: Language::English,
        })
        .unwrap();
        assert_eq!(serialized.trim(), "language = \"en\"");
    }
}
