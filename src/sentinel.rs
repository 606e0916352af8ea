//! Sentinel value classification.
//!
//! Text fields cannot hold a real absence marker, so three literal values
//! stand in for "no value": the empty string, `None` and `NULL`. Matching is
//! exact and case-sensitive; whitespace-only strings are ordinary text.

use serde::{Deserialize, Serialize};

/// The exact set of values treated as empty-like.
pub const SENTINELS: [&str; 3] = ["", "None", "NULL"];

/// Classification of a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `""`
    Empty,
    /// `"None"`
    NoneToken,
    /// `"NULL"`
    NullToken,
    /// Anything else.
    Present,
}

impl ValueKind {
    pub fn is_empty_like(self) -> bool {
        !matches!(self, ValueKind::Present)
    }
}

/// Classify a field value.
pub fn classify(value: &str) -> ValueKind {
    match value {
        "" => ValueKind::Empty,
        "None" => ValueKind::NoneToken,
        "NULL" => ValueKind::NullToken,
        _ => ValueKind::Present,
    }
}

pub fn is_empty_like(value: &str) -> bool {
    classify(value).is_empty_like()
}

/// Field value as it should be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// The field is to be cleared (written as NULL / left out).
    Cleared(ValueKind),
    /// Ordinary text, stored as typed.
    Text(&'a str),
}

impl<'a> FieldValue<'a> {
    pub fn parse(value: &'a str) -> Self {
        match classify(value) {
            ValueKind::Present => FieldValue::Text(value),
            kind => FieldValue::Cleared(kind),
        }
    }

    /// The text to store, or `None` when the field is cleared.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Cleared(_) => None,
        }
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, FieldValue::Cleared(_))
    }
}
