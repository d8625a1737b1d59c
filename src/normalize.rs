//! Text normalization for sentence matching
//!
//! Sentences and vocabulary tokens are normalized the same way so that
//! token equality is a plain string comparison:
//! - Lowercase conversion
//! - Stripping a fixed punctuation set (removed, not replaced by a space)
//! - Unicode NFC composition (precomposed accents)
//! - Whitespace collapsing
//!
//! All match positions are indices into [`tokenize`]'s output.

use unicode_normalization::UnicodeNormalization;

/// Punctuation removed from sentences and vocabulary tokens before matching
const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\u{201C}', '\u{201D}', '\'', '\u{2018}', '\u{2019}', '(',
    ')', '¿', '¡', '«', '»',
];

/// Whether `c` belongs to the stripped punctuation set
#[inline]
pub fn is_stripped_punctuation(c: char) -> bool {
    STRIPPED_PUNCTUATION.contains(&c)
}

/// Normalize a sentence for matching.
///
/// # Examples
///
/// ```
/// use vocab_tracker::normalize::normalize_sentence;
///
/// assert_eq!(normalize_sentence("¿Me gusta la pizza?"), "me gusta la pizza");
/// assert_eq!(normalize_sentence("  Il y a   beaucoup. "), "il y a beaucoup");
/// ```
pub fn normalize_sentence(sentence: &str) -> String {
    let stripped: String = sentence
        .to_lowercase()
        .chars()
        .filter(|c| !is_stripped_punctuation(*c))
        .collect();

    // Compose after stripping so a removed mark cannot leave a decomposed pair
    stripped
        .nfc()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a sentence into matching tokens.
///
/// Returns an empty vector for blank input.
pub fn tokenize(sentence: &str) -> Vec<String> {
    normalize_sentence(sentence)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Clean a single word the same way sentences are normalized
pub fn clean_word(word: &str) -> String {
    let stripped: String = word
        .to_lowercase()
        .chars()
        .filter(|c| !is_stripped_punctuation(*c))
        .collect();
    stripped.nfc().collect::<String>().trim().to_string()
}
