//! Vocabulary Tracker - sentence-to-vocabulary matching
//!
//! Finds which vocabulary items (single words and multi-word expressions)
//! occur in a Spanish, French or German sentence, where they occur, and how
//! they matched.
//!
//! ## Pipeline
//!
//! ```text
//! sentence ─► normalize ─► SentenceMatcher ─► primary matches (MWE / exact)
//!                               │
//!                               └─► ResidualLemmaResolver ─► base-word matches
//!                                         │
//!                   merged, position-sorted result + coverage ◄┘
//! ```
//!
//! ## Modules
//!
//! - [`service`] - [`VocabularyTrackingService`], the public facade
//! - [`index`] - TTL-cached, match-ordered vocabulary per language
//! - [`matcher`] - greedy longest-match-first span matching
//! - [`resolver`] - lemma-based matching of leftover tokens
//! - [`lemmatizer`] - rule-based morphology with a dictionary short-circuit
//! - [`store`] - [`VocabularyStore`] trait and implementations
//! - [`normalize`] - sentence normalization and tokenization
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use vocab_tracker::{InMemoryVocabularyStore, Language, VocabularyEntry, VocabularyTrackingService};
//!
//! # async fn demo() {
//! let store = InMemoryVocabularyStore::from_entries(vec![
//!     VocabularyEntry::new(Uuid::new_v4(), "me gusta", "I like", Language::Spanish),
//!     VocabularyEntry::new(Uuid::new_v4(), "pizza", "pizza", Language::Spanish),
//! ]);
//! let service = VocabularyTrackingService::new(Arc::new(store));
//!
//! let result = service.parse_sentence("Me gusta la pizza", "es").await;
//! assert_eq!(result.coverage_percentage, 75.0);
//! # }
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod lemmatizer;
pub mod matcher;
pub mod normalize;
pub mod resolver;
pub mod service;
pub mod store;

pub use config::EngineConfig;
pub use error::{ConfigError, StoreError, StoreResult};
pub use index::{CacheStats, VocabularyIndex};
pub use lemmatizer::Lemmatizer;
pub use matcher::SentenceMatcher;
pub use resolver::{BasicWordFilter, ResidualLemmaResolver};
pub use service::VocabularyTrackingService;
pub use store::{InMemoryVocabularyStore, VocabularyStore};

#[cfg(feature = "database")]
pub use store::{PgVocabularyStore, StoreConfig};

pub use vocab_types::{
    Language, LanguageError, LemmaProvenance, LemmatizationMethod, LemmatizationResult,
    MatchType, MweFrequency, MweType, ParsingStats, PartOfSpeech, SentenceLemmatization,
    SentenceParsingResult, VocabularyEntry, VocabularyMatch,
};
