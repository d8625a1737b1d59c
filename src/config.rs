//! Engine configuration
//!
//! Defaults come from environment variables, falling back to the values the
//! tracking service has always used in production.

use std::path::PathBuf;
use std::time::Duration;

/// Vocabulary index refresh interval when `VOCAB_CACHE_TTL_SECS` is unset
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Longest token the residual resolver will send to the store
pub const DEFAULT_MAX_TOKEN_CHARS: usize = 50;

/// Row cap for a full-language vocabulary fetch, read by the Postgres store
pub const DEFAULT_MAX_VOCABULARY_ROWS: i64 = 10_000;

/// Matching engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long a language's vocabulary stays cached before refetching
    pub vocabulary_ttl: Duration,
    /// Tokens longer than this are never looked up
    pub max_token_chars: usize,
    /// Optional YAML file overriding the closed-class word tables
    pub basic_words_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            vocabulary_ttl: std::env::var("VOCAB_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_CACHE_TTL),
            max_token_chars: std::env::var("VOCAB_MAX_TOKEN_CHARS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKEN_CHARS),
            basic_words_path: std::env::var("VOCAB_BASIC_WORDS_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl EngineConfig {
    /// Set the vocabulary cache TTL
    pub fn with_vocabulary_ttl(mut self, ttl: Duration) -> Self {
        self.vocabulary_ttl = ttl;
        self
    }

    /// Set the closed-class table override file
    pub fn with_basic_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.basic_words_path = Some(path.into());
        self
    }
}
