//! Error types for the vocabulary matching engine
//!
//! Errors only exist at fallible boundaries (backing store, configuration
//! files). The public parsing operations never return them: the service
//! converts each one into a degraded value and logs it.

use thiserror::Error;

/// Failures talking to the vocabulary store
#[derive(Error, Debug)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Vocabulary store unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed vocabulary row '{id}': {reason}")]
    Decode { id: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures loading engine configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
