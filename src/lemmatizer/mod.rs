//! Rule-based morphological analyzer
//!
//! Reduces an inflected word to its base form in four steps:
//!
//! 1. Cache lookup on `"{code}:{lowercase word}"` (no expiry)
//! 2. Dictionary check: the word is itself a trackable store entry
//! 3. First applicable rule from the language's [`rules::RuleTable`]
//! 4. Fallback to the unchanged word
//!
//! [`Lemmatizer::lemmatize`] never fails. Store errors during the dictionary
//! check are logged and the step is skipped.

pub mod french;
pub mod german;
pub mod rules;
pub mod spanish;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::debug;
use vocab_types::{
    Language, LemmatizationMethod, LemmatizationResult, SentenceLemmatization,
};

use crate::store::VocabularyStore;

pub use rules::{LemmaRule, RuleTable, MIN_LEMMA_CHARS};

/// Conjugated forms that must never short-circuit as dictionary hits
pub fn dictionary_exclusions(language: Language) -> &'static [&'static str] {
    match language {
        Language::Spanish => spanish::DICTIONARY_EXCLUSIONS,
        Language::French => french::DICTIONARY_EXCLUSIONS,
        Language::German => german::DICTIONARY_EXCLUSIONS,
    }
}

/// Leading punctuation removed before sentence-level lemmatization
fn leading_punctuation(language: Language) -> &'static [char] {
    match language {
        Language::Spanish => &['¿', '¡'],
        Language::French => &['«'],
        Language::German => &[],
    }
}

fn cache_key(word: &str, language: Language) -> String {
    format!("{}:{}", language.code(), word)
}

/// Caching lemmatizer with an optional dictionary store
pub struct Lemmatizer {
    store: Option<Arc<dyn VocabularyStore>>,
    cache: Arc<RwLock<HashMap<String, LemmatizationResult>>>,
}

impl Lemmatizer {
    /// Lemmatizer whose dictionary check consults `store`
    pub fn new(store: Arc<dyn VocabularyStore>) -> Self {
        Self {
            store: Some(store),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Lemmatizer with rules only (no dictionary check)
    pub fn rules_only() -> Self {
        Self {
            store: None,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Reduce `word` to its base form
    pub async fn lemmatize(&self, word: &str, language: Language) -> LemmatizationResult {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return LemmatizationResult::fallback(word, language);
        }

        let key = cache_key(&word, language);
        if let Some(cached) = self.cache.read().await.get(&key) {
            return cached.clone();
        }

        let result = self.analyze(&word, language).await;

        self.cache.write().await.insert(key, result.clone());
        result
    }

    async fn analyze(&self, word: &str, language: Language) -> LemmatizationResult {
        if self.is_dictionary_form(word, language).await {
            return LemmatizationResult::dictionary(word, language);
        }

        if let Some((rule, lemma)) = rules::table_for(language).reduce(word) {
            debug!(
                word,
                lemma = lemma.as_str(),
                pattern = rule.pattern(),
                "Rule-based lemma"
            );
            return LemmatizationResult {
                original_word: word.to_string(),
                lemma,
                part_of_speech: rule.part_of_speech,
                confidence: rule.confidence,
                method: LemmatizationMethod::RuleBased,
                language,
            };
        }

        LemmatizationResult::fallback(word, language)
    }

    async fn is_dictionary_form(&self, word: &str, language: Language) -> bool {
        let Some(store) = &self.store else {
            return false;
        };
        if dictionary_exclusions(language).contains(&word) {
            return false;
        }

        match store.lookup_by_surface_form(word, language).await {
            Ok(hit) => hit.is_some_and(|entry| entry.trackable),
            Err(e) => {
                debug!(word, "Dictionary check skipped: {}", e);
                false
            }
        }
    }

    /// Lemmatize every token of a sentence independently
    pub async fn lemmatize_sentence(
        &self,
        sentence: &str,
        language: Language,
    ) -> SentenceLemmatization {
        let started = Instant::now();

        let lowered = sentence.to_lowercase();
        let stripped = lowered.trim_start_matches(|c: char| {
            c.is_whitespace() || leading_punctuation(language).contains(&c)
        });

        let mut results = Vec::new();
        for token in stripped
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            results.push(self.lemmatize(token, language).await);
        }

        SentenceLemmatization {
            original_sentence: sentence.to_string(),
            language,
            results,
            processing_time_ms: started.elapsed().as_millis() as u64,
        }
    }

    /// Drop every cached lemma
    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }

    /// Number of cached lemmas
    pub async fn cache_len(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryVocabularyStore;
    use uuid::Uuid;
    use vocab_types::{PartOfSpeech, VocabularyEntry};

    fn store_with(words: &[&str], language: Language) -> Arc<dyn VocabularyStore> {
        Arc::new(InMemoryVocabularyStore::from_entries(
            words
                .iter()
                .map(|w| VocabularyEntry::new(Uuid::new_v4(), *w, "", language)),
        ))
    }

    #[tokio::test]
    async fn test_rule_based_reduction() {
        let lemmatizer = Lemmatizer::rules_only();

        let result = lemmatizer.lemmatize("prefiero", Language::Spanish).await;
        assert_eq!(result.lemma, "preferir");
        assert_eq!(result.method, LemmatizationMethod::RuleBased);
        assert_eq!(result.part_of_speech, Some(PartOfSpeech::Verb));
        assert!(result.confidence >= 0.9);

        let result = lemmatizer.lemmatize("hablamos", Language::Spanish).await;
        assert_eq!(result.lemma, "hablar");
    }

    #[tokio::test]
    async fn test_infinitive_falls_back() {
        let lemmatizer = Lemmatizer::rules_only();
        let result = lemmatizer.lemmatize("comer", Language::Spanish).await;
        assert_eq!(result.lemma, "comer");
        assert_eq!(result.method, LemmatizationMethod::Fallback);
        assert_eq!(result.confidence, 1.0);
    }

    #[tokio::test]
    async fn test_degenerate_input_falls_back() {
        let lemmatizer = Lemmatizer::rules_only();

        let empty = lemmatizer.lemmatize("", Language::German).await;
        assert_eq!(empty.method, LemmatizationMethod::Fallback);
        assert_eq!(empty.lemma, "");

        let junk = lemmatizer.lemmatize("xyz123!!", Language::German).await;
        assert_eq!(junk.method, LemmatizationMethod::Fallback);
        assert_eq!(junk.lemma, "xyz123!!");
    }

    #[tokio::test]
    async fn test_dictionary_short_circuit() {
        let lemmatizer = Lemmatizer::new(store_with(&["hablas"], Language::Spanish));
        let result = lemmatizer.lemmatize("Hablas", Language::Spanish).await;
        assert_eq!(result.method, LemmatizationMethod::Dictionary);
        assert_eq!(result.lemma, "hablas");
        assert_eq!(result.confidence, 1.0);
    }

    #[tokio::test]
    async fn test_exclusion_list_still_reduced() {
        let lemmatizer = Lemmatizer::new(store_with(
            &["prefiero", "como", "hablo"],
            Language::Spanish,
        ));
        for (word, lemma) in [("prefiero", "preferir"), ("como", "comer"), ("hablo", "hablar")] {
            let result = lemmatizer.lemmatize(word, Language::Spanish).await;
            assert_eq!(result.method, LemmatizationMethod::RuleBased, "{}", word);
            assert_eq!(result.lemma, lemma);
        }
    }

    #[tokio::test]
    async fn test_cache_is_per_language() {
        let lemmatizer = Lemmatizer::rules_only();
        lemmatizer.lemmatize("parle", Language::French).await;
        lemmatizer.lemmatize("parle", Language::Spanish).await;
        assert_eq!(lemmatizer.cache_len().await, 2);

        lemmatizer.clear().await;
        assert_eq!(lemmatizer.cache_len().await, 0);
    }

    #[tokio::test]
    async fn test_lemmatize_sentence() {
        let lemmatizer = Lemmatizer::rules_only();
        let result = lemmatizer
            .lemmatize_sentence("¿Prefieres comer pan?", Language::Spanish)
            .await;

        let lemmas: Vec<_> = result.results.iter().map(|r| r.lemma.as_str()).collect();
        assert_eq!(lemmas, vec!["preferir", "comer", "pan"]);
        assert_eq!(result.language, Language::Spanish);
    }
}
