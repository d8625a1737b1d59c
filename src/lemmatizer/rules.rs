//! Suffix-substitution rule tables
//!
//! Each language provides a static list of [`RuleSpec`] tuples. They are
//! compiled once into a [`RuleTable`], stably sorted by descending
//! confidence, so irregular forms (0.9+) are always tried before generic
//! suffix rules and noun-plural rules (< 0.5) come last.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use vocab_types::{Language, PartOfSpeech};

use super::{french, german, spanish};

/// Shortest lemma a rule may produce, in characters
pub const MIN_LEMMA_CHARS: usize = 3;

/// `(pattern, replacement, part of speech, confidence)`
///
/// Patterns are anchored regexes; replacements use `${n}` group syntax.
pub type RuleSpec = (&'static str, &'static str, Option<PartOfSpeech>, f32);

/// One compiled substitution rule
#[derive(Debug, Clone)]
pub struct LemmaRule {
    pattern: Regex,
    replacement: &'static str,
    pub part_of_speech: Option<PartOfSpeech>,
    pub confidence: f32,
}

impl LemmaRule {
    pub fn compile(spec: &RuleSpec) -> Result<Self, regex::Error> {
        let (pattern, replacement, part_of_speech, confidence) = *spec;
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement,
            part_of_speech,
            confidence,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Lemma produced for `word`, or `None` when the rule does not apply.
    ///
    /// A rule applies only if its pattern matches, the output differs from
    /// the input and the output is at least [`MIN_LEMMA_CHARS`] long.
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.pattern.is_match(word) {
            return None;
        }
        let lemma = self.pattern.replace(word, self.replacement);
        if lemma == word || lemma.chars().count() < MIN_LEMMA_CHARS {
            return None;
        }
        Some(lemma.into_owned())
    }
}

/// Confidence-ordered rules for one language
#[derive(Debug, Default)]
pub struct RuleTable {
    rules: Vec<LemmaRule>,
}

impl RuleTable {
    /// Compile `specs`, skipping (and logging) any pattern that fails to
    /// compile
    pub fn build(language: Language, specs: &[RuleSpec]) -> Self {
        let mut rules: Vec<LemmaRule> = specs
            .iter()
            .filter_map(|spec| match LemmaRule::compile(spec) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    warn!(
                        language = language.code(),
                        pattern = spec.0,
                        "Skipping invalid lemma rule: {}",
                        e
                    );
                    None
                }
            })
            .collect();

        // sort_by is stable: equal-confidence rules keep table order
        rules.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        Self { rules }
    }

    /// First applicable rule and its output
    pub fn reduce(&self, word: &str) -> Option<(&LemmaRule, String)> {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(word).map(|lemma| (rule, lemma)))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[LemmaRule] {
        &self.rules
    }
}

static SPANISH_RULES: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::build(Language::Spanish, spanish::RULES));

static FRENCH_RULES: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::build(Language::French, french::RULES));

static GERMAN_RULES: LazyLock<RuleTable> =
    LazyLock::new(|| RuleTable::build(Language::German, german::RULES));

/// Compiled rule table for `language`
pub fn table_for(language: Language) -> &'static RuleTable {
    match language {
        Language::Spanish => &SPANISH_RULES,
        Language::French => &FRENCH_RULES,
        Language::German => &GERMAN_RULES,
    }
}
