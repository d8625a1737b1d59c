//! Sanity filter for tokens sent to the store

/// Characters that never appear in a legitimate lookup token
const REJECTED_CHARS: &[char] = &[
    '<', '>', '{', '}', '[', ']', '\\', '|', '`', '~', '@', '#', '$', '%', '^', '&', '*', '(',
    ')', '+', '=',
];

/// Whether `token` is safe and plausible enough to look up.
///
/// Rejects empty tokens, tokens over `max_chars`, pure punctuation, tokens
/// containing any rejected character and tokens that are less than half
/// alphanumeric. Short words are never rejected for their length.
pub fn is_valid_lookup_token(token: &str, max_chars: usize) -> bool {
    let total = token.chars().count();
    if total == 0 || total > max_chars {
        return false;
    }
    if token.contains(REJECTED_CHARS) {
        return false;
    }

    let alphanumeric = token.chars().filter(|c| c.is_alphanumeric()).count();
    alphanumeric > 0 && alphanumeric * 2 >= total
}
