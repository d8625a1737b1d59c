//! Per-language vocabulary index
//!
//! Holds each language's trackable vocabulary in match order (more component
//! words first, then longer surface forms) behind a TTL cache. Scanning in
//! this order is what makes the matcher longest-match-first.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use vocab_types::{Language, VocabularyEntry};

use crate::config::DEFAULT_CACHE_TTL;
use crate::error::StoreResult;
use crate::store::VocabularyStore;

struct CachedVocabulary {
    entries: Arc<[VocabularyEntry]>,
    fetched_at: Instant,
    loaded_at: DateTime<Utc>,
}

impl CachedVocabulary {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.fetched_at.elapsed() > ttl
    }
}

/// Sort entries into match order: descending component count, then
/// descending surface form length. Stable for ties.
pub fn sort_for_matching(entries: &mut [VocabularyEntry]) {
    entries.sort_by(|a, b| {
        b.word_count()
            .cmp(&a.word_count())
            .then_with(|| {
                b.surface_form
                    .chars()
                    .count()
                    .cmp(&a.surface_form.chars().count())
            })
    });
}

/// Cached, match-ordered vocabulary per language
pub struct VocabularyIndex {
    store: Arc<dyn VocabularyStore>,
    ttl: Duration,
    cache: Arc<RwLock<HashMap<Language, CachedVocabulary>>>,
}

impl VocabularyIndex {
    pub fn new(store: Arc<dyn VocabularyStore>) -> Self {
        Self::with_ttl(store, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(store: Arc<dyn VocabularyStore>, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Match-ordered trackable vocabulary for `language`.
    ///
    /// A store failure yields an empty list and is not cached, so the next
    /// call retries.
    pub async fn get_vocabulary(&self, language: Language) -> Arc<[VocabularyEntry]> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.get(&language) {
                if !cached.is_expired(self.ttl) {
                    return Arc::clone(&cached.entries);
                }
            }
        }

        let mut entries: Vec<VocabularyEntry> =
            match self.store.fetch_trackable_vocabulary(language).await {
                Ok(rows) => rows
                    .into_iter()
                    .filter(|e| e.trackable)
                    .map(VocabularyEntry::ensure_components)
                    .collect(),
                Err(e) => {
                    warn!(
                        language = language.code(),
                        "Failed to fetch vocabulary, matching against nothing: {}",
                        e
                    );
                    return Arc::from(Vec::new());
                }
            };

        sort_for_matching(&mut entries);
        let entries: Arc<[VocabularyEntry]> = Arc::from(entries);

        debug!(
            language = language.code(),
            entries = entries.len(),
            "Vocabulary index refreshed"
        );

        self.cache.write().await.insert(
            language,
            CachedVocabulary {
                entries: Arc::clone(&entries),
                fetched_at: Instant::now(),
                loaded_at: Utc::now(),
            },
        );
        entries
    }

    /// Exact point lookup of a lowercase surface form in the backing store
    pub async fn lookup_surface_form(
        &self,
        surface_form: &str,
        language: Language,
    ) -> StoreResult<Option<VocabularyEntry>> {
        self.store
            .lookup_by_surface_form(surface_form, language)
            .await
    }

    /// Drop every cached language
    pub async fn clear(&self) {
        self.cache.write().await.clear();
        info!("Vocabulary index cache cleared");
    }

    pub async fn cache_stats(&self) -> CacheStats {
        let cache = self.cache.read().await;
        let mut languages: Vec<LanguageCacheStats> = cache
            .iter()
            .map(|(language, cached)| LanguageCacheStats {
                language: *language,
                entries: cached.entries.len(),
                mwe_entries: cached.entries.iter().filter(|e| e.is_mwe).count(),
                loaded_at: cached.loaded_at,
                expired: cached.is_expired(self.ttl),
            })
            .collect();
        languages.sort_by_key(|s| s.language);

        let expired_languages = languages.iter().filter(|s| s.expired).count();
        CacheStats {
            total_languages: languages.len(),
            active_languages: languages.len() - expired_languages,
            expired_languages,
            languages,
        }
    }
}

/// Cache state of one language
#[derive(Debug, Clone, Serialize)]
pub struct LanguageCacheStats {
    pub language: Language,
    pub entries: usize,
    pub mwe_entries: usize,
    pub loaded_at: DateTime<Utc>,
    pub expired: bool,
}

/// Vocabulary index cache statistics
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub total_languages: usize,
    pub active_languages: usize,
    pub expired_languages: usize,
    pub languages: Vec<LanguageCacheStats>,
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vocabulary Index Cache:")?;
        writeln!(
            f,
            "  Languages: {} ({} active, {} expired)",
            self.total_languages, self.active_languages, self.expired_languages
        )?;
        for lang in &self.languages {
            writeln!(
                f,
                "  {}: {} entries ({} MWEs), loaded {}",
                lang.language,
                lang.entries,
                lang.mwe_entries,
                lang.loaded_at.format("%Y-%m-%d %H:%M:%S")
            )?;
        }
        Ok(())
    }
}
