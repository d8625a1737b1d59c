//! Supported learning languages and name normalization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language the matching engine has morphology and closed-class tables for.
///
/// Serialized as its ISO 639-1 code, which is also the value stored in the
/// vocabulary table's `language` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
}

/// Error for language names the engine does not recognise
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Unsupported language '{0}': expected one of es, fr, de (or spanish, french, german)")]
    Unsupported(String),
}

impl Language {
    /// All supported languages, in code order
    pub const ALL: [Language; 3] = [Language::German, Language::Spanish, Language::French];

    /// ISO 639-1 code used by the vocabulary store
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
        }
    }

    /// English display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
        }
    }

    /// Normalize a human-readable name or a code into a [`Language`].
    ///
    /// Accepts codes (`es`), English names (`Spanish`) and endonyms
    /// (`español`, `français`, `deutsch`), case-insensitively and ignoring
    /// surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, LanguageError> {
        match input.trim().to_lowercase().as_str() {
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            "fr" | "french" | "français" | "francais" => Ok(Language::French),
            "de" | "german" | "deutsch" => Ok(Language::German),
            _ => Err(LanguageError::Unsupported(input.to_string())),
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_and_names() {
        assert_eq!(Language::parse("es"), Ok(Language::Spanish));
        assert_eq!(Language::parse("Spanish"), Ok(Language::Spanish));
        assert_eq!(Language::parse(" FRENCH "), Ok(Language::French));
        assert_eq!(Language::parse("Deutsch"), Ok(Language::German));
        assert_eq!(Language::parse("de"), Ok(Language::German));
    }

    #[test]
    fn test_parse_unsupported() {
        let err = Language::parse("klingon").unwrap_err();
        assert_eq!(err, LanguageError::Unsupported("klingon".to_string()));
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Language::French).unwrap();
        assert_eq!(json, "\"fr\"");
        let back: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(back, Language::German);
    }
}
