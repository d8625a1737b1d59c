//! Closed-class word tables
//!
//! Articles, pronouns, the most common forms of "to be"/"to have",
//! conjunctions, prepositions and interrogatives are treated as already
//! known and never produce residual matches. The built-in tables can be
//! replaced per language from a YAML file:
//!
//! ```yaml
//! es: [el, la, los, las]
//! fr: [le, la, les]
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::info;
use vocab_types::Language;

use crate::error::ConfigError;

const SPANISH: &[&str] = &[
    "el", "la", "los", "las", "un", "una", "unos", "unas", "yo", "tú", "él", "ella", "nosotros",
    "nosotras", "vosotros", "vosotras", "ellos", "ellas", "mi", "tu", "su", "nuestro", "nuestra",
    "vuestro", "vuestra", "me", "te", "se", "nos", "os", "le", "les", "lo", "es", "son", "está",
    "están", "hay", "tiene", "tienen", "ser", "estar", "tener", "haber", "y", "o", "pero", "de",
    "en", "a", "con", "por", "para", "sin", "qué", "quién", "cómo", "cuándo", "dónde", "por qué",
];

const FRENCH: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "je", "tu", "il", "elle", "nous", "vous", "ils",
    "elles", "mon", "ma", "mes", "ton", "ta", "tes", "son", "sa", "ses", "me", "te", "se", "lui",
    "leur", "est", "sont", "a", "ont", "être", "avoir", "et", "ou", "mais", "de", "du", "à",
    "avec", "pour", "sans",
];

const GERMAN: &[&str] = &[
    "der", "die", "das", "den", "dem", "des", "ein", "eine", "einen", "einem", "einer", "ich",
    "du", "er", "sie", "es", "wir", "ihr", "mein", "meine", "dein", "deine", "sein", "seine",
    "ihre", "mir", "dir", "ihm", "uns", "euch", "ihnen", "ist", "sind", "hat", "haben", "und",
    "oder", "aber", "von", "zu", "mit", "für", "ohne",
];

/// Per-language closed-class word sets
#[derive(Debug, Clone)]
pub struct BasicWordFilter {
    tables: HashMap<Language, HashSet<String>>,
}

impl Default for BasicWordFilter {
    fn default() -> Self {
        let mut tables = HashMap::new();
        for (language, words) in [
            (Language::Spanish, SPANISH),
            (Language::French, FRENCH),
            (Language::German, GERMAN),
        ] {
            tables.insert(language, words.iter().map(|w| w.to_string()).collect());
        }
        Self { tables }
    }
}

impl BasicWordFilter {
    /// True if `word` (already lowercased) is a closed-class word
    pub fn is_basic(&self, word: &str, language: Language) -> bool {
        self.tables
            .get(&language)
            .is_some_and(|table| table.contains(word))
    }

    /// Replace the table for `language`
    pub fn set_words<I, S>(&mut self, language: Language, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self.tables.insert(language, table);
    }

    pub fn len(&self, language: Language) -> usize {
        self.tables.get(&language).map(HashSet::len).unwrap_or(0)
    }

    /// Defaults overridden by the languages present in a YAML document
    pub fn load_from_str(yaml: &str) -> Result<Self, ConfigError> {
        let overrides: HashMap<Language, Vec<String>> =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut filter = Self::default();
        for (language, words) in overrides {
            filter.set_words(language, words);
        }
        Ok(filter)
    }

    /// Defaults overridden by the languages present in a YAML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let filter = Self::load_from_str(&content)?;
        info!("Loaded basic word tables from {}", path.display());
        Ok(filter)
    }
}
