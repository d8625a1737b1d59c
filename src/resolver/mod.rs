//! Residual lemma resolution
//!
//! Second matching phase. Every token the primary matcher left uncovered
//! goes through:
//!
//! 1. closed-class filter ([`BasicWordFilter`])
//! 2. validity filter ([`is_valid_lookup_token`])
//! 3. lemmatization
//! 4. validity filter again, on the lemma
//! 5. exact store lookup of the lemma, discarding MWE hits
//!
//! Hits become [`MatchType::BaseWord`](vocab_types::MatchType::BaseWord)
//! matches carrying their lemmatization provenance. Lookups run
//! concurrently; results are put back in token order before merging.

pub mod basic_words;
pub mod validity;

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};
use vocab_types::{Language, VocabularyMatch};

use crate::config::DEFAULT_MAX_TOKEN_CHARS;
use crate::index::VocabularyIndex;
use crate::lemmatizer::Lemmatizer;

pub use basic_words::BasicWordFilter;
pub use validity::is_valid_lookup_token;

/// Finds base-word matches for tokens the primary phase left unmatched
pub struct ResidualLemmaResolver {
    index: Arc<VocabularyIndex>,
    lemmatizer: Arc<Lemmatizer>,
    basic_words: BasicWordFilter,
    max_token_chars: usize,
}

impl ResidualLemmaResolver {
    pub fn new(index: Arc<VocabularyIndex>, lemmatizer: Arc<Lemmatizer>) -> Self {
        Self {
            index,
            lemmatizer,
            basic_words: BasicWordFilter::default(),
            max_token_chars: DEFAULT_MAX_TOKEN_CHARS,
        }
    }

    pub fn with_basic_words(mut self, basic_words: BasicWordFilter) -> Self {
        self.basic_words = basic_words;
        self
    }

    pub fn with_max_token_chars(mut self, max_token_chars: usize) -> Self {
        self.max_token_chars = max_token_chars;
        self
    }

    pub fn basic_words(&self) -> &BasicWordFilter {
        &self.basic_words
    }

    /// Tokens worth looking up: uncovered, not closed-class, valid
    pub fn candidates<'a>(
        &self,
        tokens: &'a [String],
        primary: &[VocabularyMatch],
        language: Language,
    ) -> Vec<(usize, &'a str)> {
        let mut used = vec![false; tokens.len()];
        for m in primary {
            for slot in used.iter_mut().take(m.end_index + 1).skip(m.start_index) {
                *slot = true;
            }
        }

        tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| !used[*i])
            .map(|(i, token)| (i, token.as_str()))
            .filter(|(_, token)| !self.basic_words.is_basic(token, language))
            .filter(|(_, token)| is_valid_lookup_token(token, self.max_token_chars))
            .collect()
    }

    /// Base-word matches for the uncovered tokens, in token order.
    ///
    /// Every non-MWE lemma hit is emitted, so one entry can match several
    /// inflected tokens and may also appear among `primary`.
    pub async fn resolve(
        &self,
        tokens: &[String],
        primary: &[VocabularyMatch],
        language: Language,
    ) -> Vec<VocabularyMatch> {
        let candidates = self.candidates(tokens, primary, language);
        if candidates.is_empty() {
            return Vec::new();
        }

        let lookups = candidates
            .into_iter()
            .map(|(index, token)| self.resolve_token(index, token, language));
        let mut found: Vec<VocabularyMatch> = join_all(lookups)
            .await
            .into_iter()
            .flatten()
            .collect();
        found.sort_by_key(|m| m.start_index);

        debug!(
            language = language.code(),
            matches = found.len(),
            "Residual resolution complete"
        );
        found
    }

    async fn resolve_token(
        &self,
        index: usize,
        token: &str,
        language: Language,
    ) -> Option<VocabularyMatch> {
        let lemma = self.lemmatizer.lemmatize(token, language).await;
        let lookup = lemma.lemma.to_lowercase();
        if !is_valid_lookup_token(&lookup, self.max_token_chars) {
            debug!(token, lemma = lookup.as_str(), "Skipping invalid lemma");
            return None;
        }

        match self.index.lookup_surface_form(&lookup, language).await {
            Ok(Some(entry)) if !entry.is_mwe => Some(VocabularyMatch::base_word(
                entry.ensure_components(),
                index,
                &lemma,
            )),
            Ok(_) => None,
            Err(e) => {
                warn!(
                    token,
                    lemma = lookup.as_str(),
                    "Lemma lookup failed, leaving token unmatched: {}",
                    e
                );
                None
            }
        }
    }
}
