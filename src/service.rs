//! Vocabulary tracking service
//!
//! Public entry point tying the index, matcher, residual resolver and
//! lemmatizer together. None of the parsing operations return errors:
//! invalid input gives an empty result, an unsupported language gives a
//! result with every token unmatched, and store failures degrade to fewer
//! matches.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use vocab_types::{
    Language, LemmatizationResult, MatchType, MweFrequency, ParsingStats,
    SentenceLemmatization, SentenceParsingResult, VocabularyMatch,
};

use crate::config::EngineConfig;
use crate::index::{CacheStats, VocabularyIndex};
use crate::lemmatizer::Lemmatizer;
use crate::matcher::SentenceMatcher;
use crate::normalize::tokenize;
use crate::resolver::{BasicWordFilter, ResidualLemmaResolver};
use crate::store::VocabularyStore;

/// Number of MWEs reported in [`ParsingStats::most_common_mwes`]
const TOP_MWES: usize = 10;

/// Sentence-to-vocabulary matching service.
///
/// Cheap to share behind an `Arc`; all caches are internally synchronized.
pub struct VocabularyTrackingService {
    index: Arc<VocabularyIndex>,
    lemmatizer: Arc<Lemmatizer>,
    matcher: SentenceMatcher,
    resolver: ResidualLemmaResolver,
}

impl VocabularyTrackingService {
    /// Service over `store` with configuration from the environment
    pub fn new(store: Arc<dyn VocabularyStore>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: Arc<dyn VocabularyStore>, config: EngineConfig) -> Self {
        let basic_words = match &config.basic_words_path {
            Some(path) => BasicWordFilter::load_from_file(path).unwrap_or_else(|e| {
                warn!("Using built-in basic word tables: {}", e);
                BasicWordFilter::default()
            }),
            None => BasicWordFilter::default(),
        };

        let index = Arc::new(VocabularyIndex::with_ttl(
            Arc::clone(&store),
            config.vocabulary_ttl,
        ));
        let lemmatizer = Arc::new(Lemmatizer::new(store));
        let matcher = SentenceMatcher::new(Arc::clone(&lemmatizer));
        let resolver = ResidualLemmaResolver::new(Arc::clone(&index), Arc::clone(&lemmatizer))
            .with_basic_words(basic_words)
            .with_max_token_chars(config.max_token_chars);

        Self {
            index,
            lemmatizer,
            matcher,
            resolver,
        }
    }

    /// Exact and MWE matches only
    #[instrument(skip(self, sentence))]
    pub async fn parse_sentence<'a>(
        &self,
        sentence: impl Into<Option<&'a str>>,
        language: &str,
    ) -> SentenceParsingResult {
        self.parse(sentence.into(), language, false).await
    }

    /// Exact and MWE matches, then base-word matches for inflected leftovers
    #[instrument(skip(self, sentence))]
    pub async fn parse_sentence_with_lemmatization<'a>(
        &self,
        sentence: impl Into<Option<&'a str>>,
        language: &str,
    ) -> SentenceParsingResult {
        self.parse(sentence.into(), language, true).await
    }

    /// Trackable matches of a lemmatized parse
    pub async fn get_trackable_vocabulary<'a>(
        &self,
        sentence: impl Into<Option<&'a str>>,
        language: &str,
    ) -> Vec<VocabularyMatch> {
        self.parse(sentence.into(), language, true)
            .await
            .vocabulary_matches
            .into_iter()
            .filter(|m| m.entry.trackable)
            .collect()
    }

    async fn parse(
        &self,
        sentence: Option<&str>,
        language: &str,
        use_lemmatization: bool,
    ) -> SentenceParsingResult {
        let Some(sentence) = sentence.filter(|s| !s.trim().is_empty()) else {
            debug!("Empty sentence, nothing to parse");
            return SentenceParsingResult::empty(sentence.unwrap_or_default());
        };

        let tokens = tokenize(sentence);

        let language = match Language::parse(language) {
            Ok(language) => language,
            Err(e) => {
                warn!("{}, leaving every word unmatched", e);
                return SentenceParsingResult::from_matches(sentence, &tokens, Vec::new());
            }
        };

        let vocabulary = self.index.get_vocabulary(language).await;
        let mut matches = self
            .matcher
            .find_matches(&tokens, &vocabulary, language, use_lemmatization)
            .await;

        if use_lemmatization {
            let secondary = self.resolver.resolve(&tokens, &matches, language).await;
            matches.extend(secondary);
        }

        let result = SentenceParsingResult::from_matches(sentence, &tokens, matches);
        debug!(
            language = language.code(),
            matches = result.vocabulary_matches.len(),
            coverage = result.coverage_percentage,
            "Sentence parsed"
        );
        result
    }

    /// Base form of a single word
    pub async fn lemmatize(&self, word: &str, language: Language) -> LemmatizationResult {
        self.lemmatizer.lemmatize(word, language).await
    }

    /// Per-token lemmatization of a whole sentence
    pub async fn lemmatize_sentence(
        &self,
        sentence: &str,
        language: Language,
    ) -> SentenceLemmatization {
        self.lemmatizer.lemmatize_sentence(sentence, language).await
    }

    /// Coverage and MWE statistics over a batch of sentences (exact/MWE
    /// parsing)
    #[instrument(skip(self, sentences))]
    pub async fn parsing_stats<I, S>(&self, sentences: I, language: &str) -> ParsingStats
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total_sentences = 0usize;
        let mut coverage_sum = 0.0f64;
        let mut mwe_counts: HashMap<String, usize> = HashMap::new();

        for sentence in sentences {
            let result = self.parse_sentence(sentence.as_ref(), language).await;
            total_sentences += 1;
            coverage_sum += result.coverage_percentage;
            for m in result.matches_of_type(MatchType::Mwe) {
                *mwe_counts.entry(m.word().to_string()).or_insert(0) += 1;
            }
        }

        let total_mwes_found = mwe_counts.values().sum();
        let mut most_common_mwes: Vec<MweFrequency> = mwe_counts
            .into_iter()
            .map(|(word, count)| MweFrequency { word, count })
            .collect();
        most_common_mwes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        most_common_mwes.truncate(TOP_MWES);

        let average_coverage = if total_sentences == 0 {
            0.0
        } else {
            (coverage_sum / total_sentences as f64 * 100.0).round() / 100.0
        };

        ParsingStats {
            total_sentences,
            average_coverage,
            total_mwes_found,
            most_common_mwes,
        }
    }

    /// Drop cached vocabulary, and cached lemmas too when `include_lemmas`
    pub async fn clear_cache(&self, include_lemmas: bool) {
        self.index.clear().await;
        if include_lemmas {
            self.lemmatizer.clear().await;
            info!("Lemma cache cleared");
        }
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.index.cache_stats().await
    }
}

