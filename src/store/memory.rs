//! In-memory vocabulary store

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use vocab_types::{Language, VocabularyEntry};

use super::VocabularyStore;
use crate::error::{StoreError, StoreResult};
use crate::normalize::clean_word;

/// HashMap-backed store holding every entry in memory.
///
/// Untracked entries are kept (so fixtures can model them) but never
/// returned by either store operation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVocabularyStore {
    entries: HashMap<Language, Vec<VocabularyEntry>>,
    /// (language, cleaned surface form) → position in `entries[language]`
    form_index: HashMap<(Language, String), usize>,
}

impl InMemoryVocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from entries of any language
    pub fn from_entries(entries: impl IntoIterator<Item = VocabularyEntry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            store.insert(entry);
        }
        store
    }

    /// Load from a JSON array of vocabulary entries
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let entries: Vec<VocabularyEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Load from a JSON file containing an array of vocabulary entries
    pub fn load_from_file(path: &Path) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Add an entry. The first trackable entry for a surface form wins point
    /// lookups.
    pub fn insert(&mut self, entry: VocabularyEntry) {
        let entry = entry.ensure_components();
        let language = entry.language;
        let list = self.entries.entry(language).or_default();

        if entry.trackable {
            let key = (language, clean_word(&entry.surface_form));
            self.form_index.entry(key).or_insert(list.len());
        }
        list.push(entry);
    }

    /// Number of entries (tracked or not) for a language
    pub fn len(&self, language: Language) -> usize {
        self.entries.get(&language).map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

#[async_trait]
impl VocabularyStore for InMemoryVocabularyStore {
    async fn fetch_trackable_vocabulary(
        &self,
        language: Language,
    ) -> StoreResult<Vec<VocabularyEntry>> {
        Ok(self
            .entries
            .get(&language)
            .map(|list| list.iter().filter(|e| e.trackable).cloned().collect())
            .unwrap_or_default())
    }

    async fn lookup_by_surface_form(
        &self,
        surface_form: &str,
        language: Language,
    ) -> StoreResult<Option<VocabularyEntry>> {
        let key = (language, clean_word(surface_form));
        let Some(&pos) = self.form_index.get(&key) else {
            return Ok(None);
        };

        self.entries
            .get(&language)
            .and_then(|list| list.get(pos))
            .cloned()
            .map(Some)
            .ok_or_else(|| StoreError::Decode {
                id: surface_form.to_string(),
                reason: "form index points past the entry list".to_string(),
            })
    }
}
