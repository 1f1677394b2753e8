//! On-disk representation of the word-pair store.

use serde::{Deserialize, Serialize};
use wordchain_core::WordPair;

/// Root document of `word_pairs.toml`.
///
/// ```toml
/// [[pair]]
/// first_word = "sun"
/// second_word = "flower"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordPairsDocument {
    #[serde(rename = "pair", default)]
    pub pairs: Vec<WordPairDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPairDto {
    pub first_word: String,
    pub second_word: String,
}

impl From<WordPairDto> for WordPair {
    fn from(dto: WordPairDto) -> Self {
        WordPair::new(dto.first_word, dto.second_word)
    }
}

impl From<&WordPair> for WordPairDto {
    fn from(pair: &WordPair) -> Self {
        Self {
            first_word: pair.first_word.clone(),
            second_word: pair.second_word.clone(),
        }
    }
}

impl WordPairsDocument {
    pub fn into_pairs(self) -> Vec<WordPair> {
        self.pairs.into_iter().map(WordPair::from).collect()
    }
}
