//! Chain domain model.

use serde::{Deserialize, Serialize};

/// Number of words in a game chain.
pub const CHAIN_LENGTH: usize = 5;

/// Number of words the player guesses (everything but the endpoints).
pub const INTERIOR_WORDS: usize = CHAIN_LENGTH - 2;

/// An ordered word sequence produced by the sampler.
///
/// Every consecutive pair is an edge of the graph it was drawn from. Words are
/// lower case at generation time. The same word may appear at more than one
/// position when the walk runs through a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chain {
    words: Vec<String>,
}

impl Chain {
    /// Wraps an already generated or received word sequence.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.words.get(position).map(String::as_str)
    }

    /// The visible starting word.
    pub fn first(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// The visible final word.
    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// Interior word `index` (0-based, so `interior(0)` is chain position 1).
    pub fn interior(&self, index: usize) -> Option<&str> {
        if index + 2 >= self.words.len() {
            return None;
        }
        self.get(index + 1)
    }

    /// First letter of every interior word.
    ///
    /// An empty interior word contributes an empty hint.
    pub fn hints(&self) -> Vec<String> {
        let interior_count = self.words.len().saturating_sub(2);
        self.words
            .iter()
            .skip(1)
            .take(interior_count)
            .map(|w| w.chars().next().map(String::from).unwrap_or_default())
            .collect()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl From<Vec<String>> for Chain {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}
