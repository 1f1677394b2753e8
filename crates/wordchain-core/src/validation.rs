//! Guess validation rule.

/// Canonical form used for comparisons: trimmed and lower-cased.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Returns true when `submitted` matches `expected` after normalization.
///
/// Exact match only; no partial credit or edit-distance tolerance.
pub fn validate(submitted: &str, expected: &str) -> bool {
    normalize(submitted) == normalize(expected)
}
