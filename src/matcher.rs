//! Greedy longest-match-first sentence matching
//!
//! Vocabulary is scanned in index order (longest MWE first). Each entry
//! claims at most one span per sentence: the first position where its
//! components match tokens that are not yet used. Claimed tokens are
//! marked in a `used` mask, so matches never overlap.

use std::sync::Arc;

use vocab_types::{Language, VocabularyEntry, VocabularyMatch};

use crate::lemmatizer::Lemmatizer;
use crate::normalize::clean_word;

/// Finds vocabulary occurrences in a tokenized sentence
pub struct SentenceMatcher {
    lemmatizer: Arc<Lemmatizer>,
}

impl SentenceMatcher {
    pub fn new(lemmatizer: Arc<Lemmatizer>) -> Self {
        Self { lemmatizer }
    }

    /// Non-overlapping matches of `vocabulary` in `tokens`, sorted by start
    /// index.
    ///
    /// `vocabulary` must already be in match order. With
    /// `use_lemmatization`, MWE components also match inflected sentence
    /// tokens whose lemma equals the component. Single-word inflections are
    /// left to the residual resolver.
    pub async fn find_matches(
        &self,
        tokens: &[String],
        vocabulary: &[VocabularyEntry],
        language: Language,
        use_lemmatization: bool,
    ) -> Vec<VocabularyMatch> {
        let mut used = vec![false; tokens.len()];
        let mut matches = Vec::new();

        for entry in vocabulary {
            let components: Vec<String> = entry
                .component_words
                .iter()
                .map(|w| clean_word(w))
                .filter(|w| !w.is_empty())
                .collect();

            let len = components.len();
            if len == 0 || len > tokens.len() {
                continue;
            }
            let lemmatize = use_lemmatization && entry.is_mwe;

            for start in 0..=tokens.len() - len {
                let span = start..start + len;
                if used[span.clone()].iter().any(|u| *u) {
                    continue;
                }
                if !self
                    .span_matches(&tokens[span.clone()], &components, language, lemmatize)
                    .await
                {
                    continue;
                }

                used[span].fill(true);
                let mut matched = entry.clone();
                matched.component_words = components;
                matches.push(VocabularyMatch::new(matched, start, len));
                break;
            }
        }

        matches.sort_by_key(|m| m.start_index);
        matches
    }

    async fn span_matches(
        &self,
        span: &[String],
        components: &[String],
        language: Language,
        lemmatize: bool,
    ) -> bool {
        for (token, component) in span.iter().zip(components) {
            if token == component {
                continue;
            }
            if !lemmatize {
                return false;
            }
            let lemma = self.lemmatizer.lemmatize(token, language).await;
            if &lemma.lemma != component {
                return false;
            }
        }
        true
    }
}
