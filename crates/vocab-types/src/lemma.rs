//! Lemmatization result types

use serde::{Deserialize, Serialize};

use crate::Language;

/// How a lemma was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LemmatizationMethod {
    /// The surface form is itself a trackable vocabulary entry
    Dictionary,
    /// A suffix or irregular-form rule produced the lemma
    RuleBased,
    /// Nothing applied; the lemma is the unchanged word
    Fallback,
}

impl LemmatizationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LemmatizationMethod::Dictionary => "dictionary",
            LemmatizationMethod::RuleBased => "rule-based",
            LemmatizationMethod::Fallback => "fallback",
        }
    }
}

/// Coarse part-of-speech tag attached by lemmatization rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Verb,
    Noun,
    Adjective,
}

/// Output of analysing one surface word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmatizationResult {
    pub original_word: String,
    pub lemma: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,
    /// 0.0 - 1.0. For [`LemmatizationMethod::Fallback`] this is 1.0 and means
    /// "unchanged", not "certain".
    pub confidence: f32,
    pub method: LemmatizationMethod,
    pub language: Language,
}

impl LemmatizationResult {
    /// Result for a word nothing could reduce
    pub fn fallback(word: impl Into<String>, language: Language) -> Self {
        let word = word.into();
        Self {
            lemma: word.clone(),
            original_word: word,
            part_of_speech: None,
            confidence: 1.0,
            method: LemmatizationMethod::Fallback,
            language,
        }
    }

    /// Result for a word that is already a vocabulary base form
    pub fn dictionary(word: impl Into<String>, language: Language) -> Self {
        Self {
            method: LemmatizationMethod::Dictionary,
            ..Self::fallback(word, language)
        }
    }

    /// True when the lemma differs from the surface word
    pub fn is_reduced(&self) -> bool {
        self.lemma != self.original_word
    }
}

/// Per-token lemmatization of a whole sentence, for diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceLemmatization {
    pub original_sentence: String,
    pub language: Language,
    pub results: Vec<LemmatizationResult>,
    /// Wall-clock time spent lemmatizing, in milliseconds
    pub processing_time_ms: u64,
}

impl SentenceLemmatization {
    /// Lemmas in token order
    pub fn lemmas(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.lemma.as_str()).collect()
    }
}
