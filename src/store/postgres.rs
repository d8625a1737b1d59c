//! Postgres-backed vocabulary store
//!
//! Reads the `centralized_vocabulary` table. Schema management is out of
//! scope; the table is expected to exist.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use tracing::{debug, info, warn};
use uuid::Uuid;
use vocab_types::{Language, MweType, VocabularyEntry};

use super::VocabularyStore;
use crate::config::DEFAULT_MAX_VOCABULARY_ROWS;
use crate::error::{StoreError, StoreResult};

/// Connection settings for [`PgVocabularyStore`]
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
    /// Row cap for a full-language fetch
    pub max_vocabulary_rows: i64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost:5432/vocabulary".to_string()),
            max_connections: std::env::var("DATABASE_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            connection_timeout: Duration::from_secs(30),
            max_vocabulary_rows: std::env::var("VOCAB_MAX_ROWS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_VOCABULARY_ROWS),
        }
    }
}

#[derive(Debug, FromRow)]
struct VocabularyRow {
    id: Uuid,
    word: String,
    translation: Option<String>,
    language: String,
    is_mwe: Option<bool>,
    mwe_type: Option<String>,
    component_words: Option<Vec<String>>,
    should_track_for_fsrs: Option<bool>,
}

impl TryFrom<VocabularyRow> for VocabularyEntry {
    type Error = StoreError;

    fn try_from(row: VocabularyRow) -> Result<Self, Self::Error> {
        let language = Language::parse(&row.language).map_err(|e| StoreError::Decode {
            id: row.id.to_string(),
            reason: e.to_string(),
        })?;

        let entry = VocabularyEntry {
            id: row.id,
            is_mwe: row
                .is_mwe
                .unwrap_or_else(|| row.word.split_whitespace().count() > 1),
            surface_form: row.word,
            translation: row.translation.unwrap_or_default(),
            language,
            mwe_type: row.mwe_type.as_deref().map(MweType::from_tag),
            component_words: row
                .component_words
                .unwrap_or_default()
                .into_iter()
                .map(|w| w.to_lowercase())
                .collect(),
            trackable: row.should_track_for_fsrs.unwrap_or(true),
        };
        Ok(entry.ensure_components())
    }
}

const SELECT_COLUMNS: &str = "SELECT id, word, translation, language, is_mwe, mwe_type, \
     component_words, should_track_for_fsrs FROM centralized_vocabulary";

/// Vocabulary store over a Postgres pool
#[derive(Clone)]
pub struct PgVocabularyStore {
    pool: PgPool,
    max_vocabulary_rows: i64,
}

impl PgVocabularyStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            max_vocabulary_rows: DEFAULT_MAX_VOCABULARY_ROWS,
        }
    }

    /// Open a pool with `config`
    pub async fn connect(config: StoreConfig) -> StoreResult<Self> {
        info!(
            "Connecting to vocabulary database: {}",
            mask_database_url(&config.database_url)
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to vocabulary database: {}", e);
                e
            })?;

        Ok(Self {
            pool,
            max_vocabulary_rows: config.max_vocabulary_rows,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl VocabularyStore for PgVocabularyStore {
    async fn fetch_trackable_vocabulary(
        &self,
        language: Language,
    ) -> StoreResult<Vec<VocabularyEntry>> {
        let sql = format!(
            "{} WHERE language = $1 AND COALESCE(should_track_for_fsrs, true) = true \
             ORDER BY is_mwe DESC, word DESC LIMIT $2",
            SELECT_COLUMNS
        );

        let rows: Vec<VocabularyRow> = sqlx::query_as(&sql)
            .bind(language.code())
            .bind(self.max_vocabulary_rows)
            .fetch_all(&self.pool)
            .await?;

        debug!(
            language = language.code(),
            rows = rows.len(),
            "Fetched vocabulary rows"
        );

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            match VocabularyEntry::try_from(row) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Skipping vocabulary row: {}", e),
            }
        }
        Ok(entries)
    }

    async fn lookup_by_surface_form(
        &self,
        surface_form: &str,
        language: Language,
    ) -> StoreResult<Option<VocabularyEntry>> {
        let sql = format!(
            "{} WHERE language = $1 AND LOWER(word) = $2 \
             AND COALESCE(should_track_for_fsrs, true) = true LIMIT 1",
            SELECT_COLUMNS
        );

        let row: Option<VocabularyRow> = sqlx::query_as(&sql)
            .bind(language.code())
            .bind(surface_form)
            .fetch_optional(&self.pool)
            .await?;

        row.map(VocabularyEntry::try_from).transpose()
    }
}

/// Mask the password in a database URL for logging
pub(crate) fn mask_database_url(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        let mut masked = parsed.clone();
        if parsed.password().is_some() {
            let _ = masked.set_password(Some("***"));
        }
        masked.to_string()
    } else {
        let chars: Vec<char> = url.chars().collect();
        if chars.len() > 20 {
            let head: String = chars[..10].iter().collect();
            let tail: String = chars[chars.len() - 10..].iter().collect();
            format!("{}***{}", head, tail)
        } else {
            "***".to_string()
        }
    }
}
