//! Directed word-association graph.

use crate::word::WordPair;
use std::collections::BTreeMap;

/// Adjacency lists keyed by lower-cased word.
///
/// Built once from a full set of pairs and never mutated afterwards.
/// Duplicate pairs are kept, so a target listed twice is twice as likely
/// to be drawn when walking from its source.
///
/// Keys are held in a `BTreeMap` so iteration order does not depend on a
/// hasher seed and a seeded sampler reproduces the same chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl WordGraph {
    /// Builds the graph from word pairs.
    ///
    /// Both words of every pair are lower-cased; the second word is appended
    /// to the list keyed by the first. An empty input yields an empty graph.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = &'a WordPair>,
    {
        let mut edges: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for pair in pairs {
            let start = pair.first_word.to_lowercase();
            let end = pair.second_word.to_lowercase();
            edges.entry(start).or_default().push(end);
        }
        Self { edges }
    }

    /// Number of words with at least one recorded outgoing pair.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Words that can start a walk, in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Outgoing targets of `word`; empty for dead ends and unknown words.
    pub fn successors(&self, word: &str) -> &[String] {
        self.edges.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `to` is listed among the successors of `from`.
    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.successors(from).iter().any(|w| w == to)
    }
}

impl<'a> FromIterator<&'a WordPair> for WordGraph {
    fn from_iter<T: IntoIterator<Item = &'a WordPair>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}
