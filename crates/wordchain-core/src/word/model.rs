//! Word pair domain model.

use serde::{Deserialize, Serialize};

/// A stored directed association `first_word -> second_word`.
///
/// Pairs are the source of truth for the word graph. They are read in bulk
/// and never modified by the game itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    /// The word the association starts from.
    pub first_word: String,
    /// The word the association leads to.
    pub second_word: String,
}

impl WordPair {
    /// Creates a new pair from any two string-like values.
    pub fn new(first_word: impl Into<String>, second_word: impl Into<String>) -> Self {
        Self {
            first_word: first_word.into(),
            second_word: second_word.into(),
        }
    }
}
