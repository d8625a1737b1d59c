//! Vocabulary Types - Level 1 Foundation Types
//!
//! Pure data structures shared by the matching engine, its stores and any
//! downstream consumer (game sessions, reward tracking).
//!
//! ## Contents
//!
//! - [`Language`] - supported languages and name normalization
//! - [`VocabularyEntry`] - a trackable lexical unit (single word or MWE)
//! - [`LemmatizationResult`] - output of reducing one inflected word
//! - [`VocabularyMatch`] / [`SentenceParsingResult`] - located matches and coverage
//!
//! ## Rules
//!
//! 1. **NO MATCHING LOGIC** - only data structures, constructors and accessors
//! 2. **NO WORKSPACE DEPENDENCIES**
//! 3. **SERIALIZABLE** - everything crossing the engine boundary supports serde

pub mod language;
pub mod lemma;

pub use language::{Language, LanguageError};
pub use lemma::{LemmatizationMethod, LemmatizationResult, PartOfSpeech, SentenceLemmatization};

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier issued by the vocabulary store
pub type VocabularyId = Uuid;

// ============================================================================
// VOCABULARY ENTRIES
// ============================================================================

/// Informational classification of a multi-word expression.
///
/// Not consulted by the matching algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MweType {
    FixedExpression,
    Collocation,
    PhrasalVerb,
    Contraction,
    NounPhrase,
    #[serde(untagged)]
    Other(String),
}

impl MweType {
    /// Parse the free-text tag stored alongside a vocabulary row
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "fixed_expression" => MweType::FixedExpression,
            "collocation" => MweType::Collocation,
            "phrasal_verb" => MweType::PhrasalVerb,
            "contraction" => MweType::Contraction,
            "noun_phrase" => MweType::NounPhrase,
            other => MweType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MweType::FixedExpression => "fixed_expression",
            MweType::Collocation => "collocation",
            MweType::PhrasalVerb => "phrasal_verb",
            MweType::Contraction => "contraction",
            MweType::NounPhrase => "noun_phrase",
            MweType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for MweType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable lexical unit owned by the vocabulary store.
///
/// Read-only from the engine's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub id: VocabularyId,
    /// Canonical string matched against sentences ("word"); MWEs contain spaces
    #[serde(alias = "word")]
    pub surface_form: String,
    pub translation: String,
    pub language: Language,
    #[serde(default)]
    pub is_mwe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mwe_type: Option<MweType>,
    /// Ordered tokens of `surface_form`; one element for single words
    #[serde(default)]
    pub component_words: Vec<String>,
    /// Entries with `trackable = false` never enter the index
    #[serde(default = "default_trackable", alias = "should_track_for_fsrs")]
    pub trackable: bool,
}

fn default_trackable() -> bool {
    true
}

impl VocabularyEntry {
    /// Create a trackable entry, deriving MWE status and components from the
    /// surface form
    pub fn new(
        id: VocabularyId,
        surface_form: impl Into<String>,
        translation: impl Into<String>,
        language: Language,
    ) -> Self {
        let surface_form = surface_form.into();
        let component_words = split_components(&surface_form);
        Self {
            id,
            is_mwe: component_words.len() > 1,
            surface_form,
            translation: translation.into(),
            language,
            mwe_type: None,
            component_words,
            trackable: true,
        }
    }

    /// Set the MWE classification
    pub fn with_mwe_type(mut self, mwe_type: MweType) -> Self {
        self.mwe_type = Some(mwe_type);
        self
    }

    /// Mark the entry as not trackable
    pub fn untracked(mut self) -> Self {
        self.trackable = false;
        self
    }

    /// Fill `component_words` from the surface form when a store row left it
    /// empty or inconsistent with the surface form's token count.
    pub fn ensure_components(mut self) -> Self {
        let expected = self.surface_form.split_whitespace().count();
        if self.component_words.len() != expected {
            self.component_words = split_components(&self.surface_form);
        }
        self
    }

    /// Number of sentence tokens this entry covers when matched
    pub fn word_count(&self) -> usize {
        self.component_words.len().max(1)
    }
}

fn split_components(surface_form: &str) -> Vec<String> {
    surface_form
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect()
}

// ============================================================================
// MATCHES
// ============================================================================

/// How a vocabulary match was found; drives reward differentiation downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Multi-word expression matched as one unit
    Mwe,
    /// Single word matched by surface form
    Exact,
    /// Single word matched after lemmatizing an inflected form
    BaseWord,
}

/// Where a lemma-based match came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaProvenance {
    /// The inflected form found in the sentence
    pub original_form: String,
    /// The base form used for lookup
    pub lemmatized_form: String,
    pub confidence: f32,
    pub method: LemmatizationMethod,
}

impl From<&LemmatizationResult> for LemmaProvenance {
    fn from(result: &LemmatizationResult) -> Self {
        Self {
            original_form: result.original_word.clone(),
            lemmatized_form: result.lemma.clone(),
            confidence: result.confidence,
            method: result.method,
        }
    }
}

/// A located occurrence of a vocabulary entry within one parsed sentence.
///
/// `start_index` / `end_index` are inclusive token indices into the
/// normalized sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyMatch {
    #[serde(flatten)]
    pub entry: VocabularyEntry,
    pub start_index: usize,
    pub end_index: usize,
    pub match_length: usize,
    pub match_type: MatchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemmatization: Option<LemmaProvenance>,
}

impl VocabularyMatch {
    /// Match covering `length` tokens from `start_index`
    pub fn new(entry: VocabularyEntry, start_index: usize, length: usize) -> Self {
        let match_type = if entry.is_mwe {
            MatchType::Mwe
        } else {
            MatchType::Exact
        };
        let length = length.max(1);
        Self {
            entry,
            start_index,
            end_index: start_index + length - 1,
            match_length: length,
            match_type,
            lemmatization: None,
        }
    }

    /// Single-token match found through lemmatization
    pub fn base_word(entry: VocabularyEntry, index: usize, lemma: &LemmatizationResult) -> Self {
        Self {
            match_type: MatchType::BaseWord,
            lemmatization: Some(LemmaProvenance::from(lemma)),
            ..Self::new(entry, index, 1)
        }
    }

    /// The vocabulary surface form ("word")
    pub fn word(&self) -> &str {
        &self.entry.surface_form
    }

    /// True if the two inclusive token ranges share any index
    pub fn overlaps(&self, other: &VocabularyMatch) -> bool {
        self.start_index <= other.end_index && other.start_index <= self.end_index
    }
}

// ============================================================================
// SENTENCE RESULTS
// ============================================================================

/// Output of parsing one sentence. Constructed fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceParsingResult {
    pub original_sentence: String,
    /// Ordered by `start_index` ascending
    pub vocabulary_matches: Vec<VocabularyMatch>,
    /// Tokens not covered by any match, in sentence order
    pub unmatched_words: Vec<String>,
    pub total_words: usize,
    /// Sum of component word counts over all matches
    pub matched_words: usize,
    /// `matched_words / total_words * 100`, rounded to 2 decimal places
    pub coverage_percentage: f64,
}

impl SentenceParsingResult {
    /// Well-formed result for input that could not be parsed at all
    pub fn empty(original_sentence: impl Into<String>) -> Self {
        Self {
            original_sentence: original_sentence.into(),
            vocabulary_matches: Vec::new(),
            unmatched_words: Vec::new(),
            total_words: 0,
            matched_words: 0,
            coverage_percentage: 0.0,
        }
    }

    /// Build the result for `tokens`, sorting `matches` by position and
    /// computing unmatched words and coverage.
    pub fn from_matches(
        original_sentence: impl Into<String>,
        tokens: &[String],
        mut matches: Vec<VocabularyMatch>,
    ) -> Self {
        matches.sort_by_key(|m| m.start_index);

        let mut used = vec![false; tokens.len()];
        for m in &matches {
            for slot in used
                .iter_mut()
                .take(m.end_index + 1)
                .skip(m.start_index)
            {
                *slot = true;
            }
        }

        let unmatched_words = tokens
            .iter()
            .zip(&used)
            .filter(|(_, used)| !**used)
            .map(|(token, _)| token.clone())
            .collect();

        let matched_words: usize = matches.iter().map(|m| m.entry.word_count()).sum();
        let total_words = tokens.len();

        Self {
            original_sentence: original_sentence.into(),
            vocabulary_matches: matches,
            unmatched_words,
            total_words,
            matched_words,
            coverage_percentage: coverage_percentage(matched_words, total_words),
        }
    }

    /// Matches with the given match type
    pub fn matches_of_type(&self, match_type: MatchType) -> impl Iterator<Item = &VocabularyMatch> {
        self.vocabulary_matches
            .iter()
            .filter(move |m| m.match_type == match_type)
    }
}

/// Percentage rounded to two decimal places; 0 when there are no words
pub fn coverage_percentage(matched_words: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    let pct = matched_words as f64 / total_words as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

// ============================================================================
// BATCH STATISTICS
// ============================================================================

/// How often one MWE was found across a batch of sentences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MweFrequency {
    pub word: String,
    pub count: usize,
}

/// Aggregate parsing statistics over a batch of sentences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsingStats {
    pub total_sentences: usize,
    /// Mean coverage percentage, rounded to 2 decimal places
    pub average_coverage: f64,
    pub total_mwes_found: usize,
    /// Up to ten most frequent MWEs, most frequent first
    pub most_common_mwes: Vec<MweFrequency>,
}
