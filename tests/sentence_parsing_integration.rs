//! Integration tests for sentence parsing
//!
//! Tests verify:
//! 1. Longest-match-first MWE matching and coverage accounting
//! 2. Base-word matches from the residual lemma resolver
//! 3. Graceful degradation (empty vocabulary, failing store, bad input)
//! 4. Batch statistics and cache control

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use vocab_tracker::{
    InMemoryVocabularyStore, Language, LemmatizationMethod, MatchType, StoreError, StoreResult,
    VocabularyEntry, VocabularyStore, VocabularyTrackingService,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn entry(word: &str, language: Language) -> VocabularyEntry {
    VocabularyEntry::new(Uuid::new_v4(), word, "", language)
}

fn service_with(words: &[&str]) -> VocabularyTrackingService {
    let store = InMemoryVocabularyStore::from_entries(
        words.iter().map(|w| entry(w, Language::Spanish)),
    );
    VocabularyTrackingService::new(Arc::new(store))
}

fn fixture_service(file: &str) -> VocabularyTrackingService {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file);
    let store = InMemoryVocabularyStore::load_from_file(&path).unwrap();
    VocabularyTrackingService::new(Arc::new(store))
}

/// Store whose every call fails
struct UnreachableStore;

#[async_trait]
impl VocabularyStore for UnreachableStore {
    async fn fetch_trackable_vocabulary(
        &self,
        _language: Language,
    ) -> StoreResult<Vec<VocabularyEntry>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    async fn lookup_by_surface_form(
        &self,
        _surface_form: &str,
        _language: Language,
    ) -> StoreResult<Option<VocabularyEntry>> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

// ============================================================================
// PRIMARY MATCHING
// ============================================================================

#[tokio::test]
async fn test_basic_mwe_scenario() {
    let service = service_with(&["me gusta", "gusta", "pizza"]);
    let result = service.parse_sentence("Me gusta la pizza", "es").await;

    assert_eq!(result.vocabulary_matches.len(), 2);

    let mwe = &result.vocabulary_matches[0];
    assert_eq!(mwe.word(), "me gusta");
    assert_eq!(mwe.match_type, MatchType::Mwe);
    assert_eq!((mwe.start_index, mwe.end_index, mwe.match_length), (0, 1, 2));

    let pizza = &result.vocabulary_matches[1];
    assert_eq!(pizza.word(), "pizza");
    assert_eq!(pizza.match_type, MatchType::Exact);
    assert_eq!(pizza.start_index, 3);

    assert_eq!(result.unmatched_words, vec!["la"]);
    assert_eq!(result.total_words, 4);
    assert_eq!(result.matched_words, 3);
    assert_eq!(result.coverage_percentage, 75.0);
}

#[tokio::test]
async fn test_basic_mwe_scenario_with_lemmatization() {
    let service = service_with(&["me gusta", "gusta", "pizza"]);
    let plain = service.parse_sentence("Me gusta la pizza", "es").await;
    let lemmatized = service
        .parse_sentence_with_lemmatization("Me gusta la pizza", "es")
        .await;

    // "la" is closed-class and "pizza" is already covered
    assert_eq!(lemmatized.vocabulary_matches, plain.vocabulary_matches);
    assert!(lemmatized
        .vocabulary_matches
        .iter()
        .all(|m| m.match_type != MatchType::BaseWord));
    assert_eq!(lemmatized.unmatched_words, vec!["la"]);
    assert_eq!(lemmatized.coverage_percentage, 75.0);
}

#[tokio::test]
async fn test_punctuation_and_case_do_not_change_matches() {
    let service = service_with(&["me gusta", "pizza"]);
    let punctuated = service.parse_sentence("Me gusta la pizza.", "es").await;
    let bare = service.parse_sentence("me gusta la pizza", "es").await;

    assert_eq!(punctuated.vocabulary_matches, bare.vocabulary_matches);
    assert_eq!(punctuated.coverage_percentage, bare.coverage_percentage);

    let punctuated = service
        .parse_sentence_with_lemmatization("¡Me gusta la pizza!", "es")
        .await;
    let bare = service
        .parse_sentence_with_lemmatization("me gusta la pizza", "es")
        .await;
    assert_eq!(punctuated.vocabulary_matches, bare.vocabulary_matches);
}

#[tokio::test]
async fn test_mwe_wins_over_component_word() {
    let service = service_with(&["gusta", "me gusta"]);
    let result = service.parse_sentence("me gusta", "spanish").await;

    assert_eq!(result.vocabulary_matches.len(), 1);
    assert_eq!(result.vocabulary_matches[0].word(), "me gusta");
    assert!(result
        .vocabulary_matches
        .iter()
        .all(|m| m.word() != "gusta"));
}

#[tokio::test]
async fn test_untracked_entries_are_ignored() {
    let service = fixture_service("es.json");
    let result = service.parse_sentence("Hola, me gusta el café", "es").await;

    let words: Vec<_> = result.vocabulary_matches.iter().map(|m| m.word()).collect();
    assert_eq!(words, vec!["me gusta", "café"]);
    assert_eq!(result.unmatched_words, vec!["hola", "el"]);
    assert_eq!(result.coverage_percentage, 60.0);
}

#[tokio::test]
async fn test_matches_are_sorted_and_disjoint() {
    let service = fixture_service("es.json");
    let result = service
        .parse_sentence("Por supuesto, me gusta la pizza y el café", "es")
        .await;

    let matches = &result.vocabulary_matches;
    assert!(matches
        .windows(2)
        .all(|w| w[0].end_index < w[1].start_index));
    assert!(result.matched_words <= result.total_words);
}

// ============================================================================
// LEMMATIZED MATCHING
// ============================================================================

#[tokio::test]
async fn test_inflected_single_word_resolves_to_base_word() {
    let service = service_with(&["hablar"]);
    let result = service
        .parse_sentence_with_lemmatization("Nosotros hablamos mucho", "es")
        .await;

    assert_eq!(result.vocabulary_matches.len(), 1);
    let m = &result.vocabulary_matches[0];
    assert_eq!(m.word(), "hablar");
    assert_eq!(m.match_type, MatchType::BaseWord);
    assert_eq!((m.start_index, m.match_length), (1, 1));

    let provenance = m.lemmatization.as_ref().unwrap();
    assert_eq!(provenance.original_form, "hablamos");
    assert_eq!(provenance.lemmatized_form, "hablar");
    assert_eq!(provenance.method, LemmatizationMethod::RuleBased);

    assert_eq!(result.coverage_percentage, 33.33);
}

#[tokio::test]
async fn test_inflected_verb_before_unknown_words() {
    let service = service_with(&["preferir"]);
    let result = service
        .parse_sentence_with_lemmatization("Prefiero ir al cine", "es")
        .await;

    assert_eq!(result.vocabulary_matches.len(), 1);
    let m = &result.vocabulary_matches[0];
    assert_eq!(m.word(), "preferir");
    assert_eq!(m.match_type, MatchType::BaseWord);
    assert_eq!(m.start_index, 0);
    assert_eq!(
        m.lemmatization.as_ref().unwrap().original_form,
        "prefiero"
    );

    assert_eq!(result.unmatched_words, vec!["ir", "al", "cine"]);
    assert_eq!(result.coverage_percentage, 25.0);
}

#[tokio::test]
async fn test_repeated_entry_matches_every_inflection() {
    let service = service_with(&["hablar"]);

    let result = service
        .parse_sentence_with_lemmatization("Quiero hablar y hablamos", "es")
        .await;
    let found: Vec<_> = result
        .vocabulary_matches
        .iter()
        .map(|m| (m.word(), m.match_type, m.start_index))
        .collect();
    assert_eq!(
        found,
        vec![
            ("hablar", MatchType::Exact, 1),
            ("hablar", MatchType::BaseWord, 3),
        ]
    );
    assert_eq!(result.matched_words, 2);
    assert_eq!(result.coverage_percentage, 50.0);

    let result = service
        .parse_sentence_with_lemmatization("Hablamos y hablan", "es")
        .await;
    let positions: Vec<_> = result
        .vocabulary_matches
        .iter()
        .map(|m| (m.match_type, m.start_index))
        .collect();
    assert_eq!(
        positions,
        vec![(MatchType::BaseWord, 0), (MatchType::BaseWord, 2)]
    );
    assert_eq!(result.unmatched_words, vec!["y"]);
    assert_eq!(result.coverage_percentage, 66.67);
}

#[tokio::test]
async fn test_plain_parse_does_not_lemmatize() {
    let service = service_with(&["hablar"]);
    let result = service.parse_sentence("Nosotros hablamos mucho", "es").await;
    assert!(result.vocabulary_matches.is_empty());
    assert_eq!(result.coverage_percentage, 0.0);
}

#[tokio::test]
async fn test_lemmatized_mwe_and_base_words_merge() {
    let service = fixture_service("es.json");
    let result = service
        .parse_sentence_with_lemmatization("Prefiero hablar, tienes razón", "es")
        .await;

    let found: Vec<_> = result
        .vocabulary_matches
        .iter()
        .map(|m| (m.word(), m.match_type, m.start_index))
        .collect();
    assert_eq!(
        found,
        vec![
            ("preferir", MatchType::BaseWord, 0),
            ("hablar", MatchType::Exact, 1),
            ("tener razón", MatchType::Mwe, 2),
        ]
    );
    assert_eq!(result.coverage_percentage, 100.0);
}

#[tokio::test]
async fn test_get_trackable_vocabulary() {
    let service = fixture_service("es.json");
    let matches = service
        .get_trackable_vocabulary("Hola, nosotros hablamos", "es")
        .await;

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].word(), "hablar");
    assert!(matches.iter().all(|m| m.entry.trackable));
}

#[tokio::test]
async fn test_french_and_german_fixtures() {
    let fr = fixture_service("fr.json");
    let result = fr
        .parse_sentence_with_lemmatization("Il y a beaucoup de monde, nous mangeons", "fr")
        .await;
    let words: Vec<_> = result.vocabulary_matches.iter().map(|m| m.word()).collect();
    assert_eq!(words, vec!["il y a", "beaucoup de", "monde", "manger"]);

    let de = fixture_service("de.json");
    let result = de
        .parse_sentence_with_lemmatization("Du schreibst einen Brief", "de")
        .await;
    let found: Vec<_> = result
        .vocabulary_matches
        .iter()
        .map(|m| (m.word(), m.match_type))
        .collect();
    assert_eq!(
        found,
        vec![("schreiben", MatchType::BaseWord), ("brief", MatchType::Exact)]
    );
}

// ============================================================================
// DEGRADATION
// ============================================================================

#[tokio::test]
async fn test_empty_vocabulary() {
    let service = service_with(&[]);
    let result = service
        .parse_sentence_with_lemmatization("Me gusta la pizza", "es")
        .await;

    assert!(result.vocabulary_matches.is_empty());
    assert_eq!(result.total_words, 4);
    assert_eq!(result.unmatched_words.len(), 4);
    assert_eq!(result.coverage_percentage, 0.0);
}

#[tokio::test]
async fn test_missing_or_blank_sentence() {
    let service = service_with(&["pizza"]);

    for sentence in [None, Some(""), Some("   ")] {
        let result = service.parse_sentence(sentence, "es").await;
        assert!(result.vocabulary_matches.is_empty());
        assert!(result.unmatched_words.is_empty());
        assert_eq!(result.total_words, 0);
        assert_eq!(result.coverage_percentage, 0.0);
    }
}

#[tokio::test]
async fn test_unsupported_language() {
    let service = service_with(&["pizza"]);
    let result = service.parse_sentence("una pizza grande", "it").await;

    assert!(result.vocabulary_matches.is_empty());
    assert_eq!(result.unmatched_words, vec!["una", "pizza", "grande"]);
    assert_eq!(result.total_words, 3);
    assert_eq!(result.coverage_percentage, 0.0);
}

#[tokio::test]
async fn test_unreachable_store_degrades_to_no_matches() {
    let service = VocabularyTrackingService::new(Arc::new(UnreachableStore));
    let result = service
        .parse_sentence_with_lemmatization("Nosotros hablamos mucho", "es")
        .await;

    assert!(result.vocabulary_matches.is_empty());
    assert_eq!(result.unmatched_words.len(), 3);

    let lemma = service.lemmatize("hablamos", Language::Spanish).await;
    assert_eq!(lemma.lemma, "hablar");
}

#[tokio::test]
async fn test_concurrent_parses_share_caches() {
    let service = Arc::new(fixture_service("es.json"));

    let handles: Vec<_> = ["Me gusta la pizza", "Prefiero hablar", "Por supuesto"]
        .into_iter()
        .map(|sentence| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .parse_sentence_with_lemmatization(sentence, "es")
                    .await
            })
        })
        .collect();

    for handle in handles {
        let result = handle.await.unwrap();
        assert!(!result.vocabulary_matches.is_empty());
    }
    assert_eq!(service.cache_stats().await.total_languages, 1);
}

// ============================================================================
// STATISTICS AND CACHES
// ============================================================================

#[tokio::test]
async fn test_parsing_stats() {
    let service = fixture_service("es.json");
    let stats = service
        .parsing_stats(
            ["Me gusta la pizza", "Me gusta el café", "Por supuesto"],
            "es",
        )
        .await;

    assert_eq!(stats.total_sentences, 3);
    assert_eq!(stats.average_coverage, 83.33);
    assert_eq!(stats.total_mwes_found, 3);
    assert_eq!(stats.most_common_mwes[0].word, "me gusta");
    assert_eq!(stats.most_common_mwes[0].count, 2);
    assert_eq!(stats.most_common_mwes.len(), 2);
}

#[tokio::test]
async fn test_parsing_stats_empty_batch() {
    let service = service_with(&[]);
    let stats = service.parsing_stats(Vec::<String>::new(), "es").await;
    assert_eq!(stats.total_sentences, 0);
    assert_eq!(stats.average_coverage, 0.0);
    assert!(stats.most_common_mwes.is_empty());
}

#[tokio::test]
async fn test_clear_cache() {
    let service = fixture_service("es.json");
    service.parse_sentence("me gusta", "es").await;
    assert_eq!(service.cache_stats().await.total_languages, 1);

    service.clear_cache(false).await;
    assert_eq!(service.cache_stats().await.total_languages, 0);

    // Results are unchanged after a refetch
    let result = service.parse_sentence("me gusta", "es").await;
    assert_eq!(result.coverage_percentage, 100.0);
    service.clear_cache(true).await;
}
