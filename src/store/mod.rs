//! Vocabulary store boundary
//!
//! The engine never owns vocabulary data. It reads it through
//! [`VocabularyStore`], which has two operations:
//!
//! - a full fetch of trackable entries for a language (feeds the index)
//! - an exact point lookup by lowercase surface form (dictionary check and
//!   residual lemma resolution)
//!
//! Implementations:
//! - [`InMemoryVocabularyStore`] - fixtures, tests and the JSON mode of the CLI
//! - `PgVocabularyStore` - Postgres `centralized_vocabulary` table (feature `database`)

pub mod memory;
#[cfg(feature = "database")]
pub mod postgres;

use async_trait::async_trait;
use vocab_types::{Language, VocabularyEntry};

use crate::error::StoreResult;

pub use memory::InMemoryVocabularyStore;
#[cfg(feature = "database")]
pub use postgres::{PgVocabularyStore, StoreConfig};

/// Read-only access to the vocabulary inventory.
///
/// Both operations are treated as network I/O. Callers handle every error
/// as "no data"; implementations should not retry internally.
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    /// All trackable entries for `language`, in no particular order
    async fn fetch_trackable_vocabulary(
        &self,
        language: Language,
    ) -> StoreResult<Vec<VocabularyEntry>>;

    /// The trackable entry whose surface form equals `surface_form`
    /// (already lowercased), if any.
    ///
    /// Zero matching rows is `Ok(None)`, never an error. When several rows
    /// match, any one of them may be returned.
    async fn lookup_by_surface_form(
        &self,
        surface_form: &str,
        language: Language,
    ) -> StoreResult<Option<VocabularyEntry>>;
}
