//! Bounded-attempt random walk over a word graph.

use super::model::{CHAIN_LENGTH, Chain};
use crate::error::{Result, WordChainError};
use crate::graph::WordGraph;
use rand::Rng;
use rand::seq::SliceRandom;

/// Attempt budget used by the game server unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Draws fixed-length chains from a [`WordGraph`].
///
/// Each attempt starts from a uniformly chosen word and follows uniformly
/// chosen outgoing edges. An attempt that reaches a word without successors is
/// abandoned and a fresh one begins; the first full-length walk wins.
///
/// Choices are uniform per step, not over the set of possible chains: walks
/// through low-degree words are more likely than walks through hubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSampler {
    /// Number of words in a produced chain.
    pub length: usize,
    /// Number of walks tried before giving up.
    pub max_attempts: usize,
}

impl Default for ChainSampler {
    fn default() -> Self {
        Self {
            length: CHAIN_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ChainSampler {
    pub fn new(length: usize, max_attempts: usize) -> Self {
        Self {
            length,
            max_attempts,
        }
    }

    /// Samples one chain, drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// - [`WordChainError::EmptyCorpus`] when the graph has no keys; no
    ///   randomness is consumed in that case.
    /// - [`WordChainError::ChainExhausted`] after `max_attempts` walks all hit
    ///   dead ends.
    pub fn generate<R: Rng + ?Sized>(&self, graph: &WordGraph, rng: &mut R) -> Result<Chain> {
        self.generate_counted(graph, rng).map(|(chain, _)| chain)
    }

    /// Like [`generate`](Self::generate), also returning how many walks were
    /// used (1-based).
    pub fn generate_counted<R: Rng + ?Sized>(
        &self,
        graph: &WordGraph,
        rng: &mut R,
    ) -> Result<(Chain, usize)> {
        let words: Vec<&str> = graph.words().collect();
        if words.is_empty() {
            return Err(WordChainError::EmptyCorpus);
        }

        self.run_walks(|| self.walk(graph, &words, &mut *rng))
    }

    /// Calls `walk` until it yields a chain or the budget runs out.
    fn run_walks<F>(&self, mut walk: F) -> Result<(Chain, usize)>
    where
        F: FnMut() -> Option<Chain>,
    {
        let mut walks = 0;
        while walks < self.max_attempts {
            walks += 1;
            if let Some(chain) = walk() {
                return Ok((chain, walks));
            }
        }

        Err(WordChainError::chain_exhausted(walks))
    }

    /// One attempt. Returns `None` when the walk runs into a dead end.
    fn walk<R: Rng + ?Sized>(
        &self,
        graph: &WordGraph,
        words: &[&str],
        rng: &mut R,
    ) -> Option<Chain> {
        let mut current: &str = *words.choose(rng)?;
        let mut chain = Vec::with_capacity(self.length);
        chain.push(current.to_string());

        while chain.len() < self.length {
            let next = graph.successors(current).choose(rng)?;
            chain.push(next.clone());
            current = next.as_str();
        }

        (chain.len() == self.length).then(|| Chain::new(chain))
    }
}

/// Samples a chain of `length` words with at most `max_attempts` walks.
pub fn generate_chain<R: Rng + ?Sized>(
    graph: &WordGraph,
    length: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Chain> {
    ChainSampler::new(length, max_attempts).generate(graph, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::WordPair;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Wraps a seeded rng and counts every draw.
    struct CountingRng {
        inner: StdRng,
        draws: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self {
                inner: StdRng::seed_from_u64(seed),
                draws: 0,
            }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            self.draws += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    fn graph(raw: &[(&str, &str)]) -> WordGraph {
        let pairs: Vec<WordPair> = raw.iter().map(|(a, b)| WordPair::new(*a, *b)).collect();
        WordGraph::from_pairs(&pairs)
    }

    fn assert_valid_walk(graph: &WordGraph, chain: &Chain) {
        for window in chain.words().windows(2) {
            assert!(
                graph.contains_edge(&window[0], &window[1]),
                "{} -> {} is not an edge",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_cycle_yields_five_word_walk() {
        let g = graph(&[("sun", "flower"), ("flower", "pot"), ("pot", "sun")]);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let chain = ChainSampler::default().generate(&g, &mut rng).unwrap();
            assert_eq!(chain.len(), CHAIN_LENGTH);
            assert_valid_walk(&g, &chain);
        }
    }

    #[test]
    fn test_dead_end_heavy_graph_still_finds_path() {
        // Only walks starting at "a" are long enough.
        let g = graph(&[
            ("a", "b"),
            ("b", "c"),
            ("c", "d"),
            ("d", "e"),
            ("x", "y"),
            ("y", "z"),
            ("q", "r"),
        ]);

        let mut rng = StdRng::seed_from_u64(7);
        let chain = generate_chain(&g, 5, 500, &mut rng).unwrap();
        assert_eq!(chain.words(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_same_seed_same_chain() {
        let g = graph(&[
            ("cat", "nap"),
            ("cat", "fish"),
            ("nap", "time"),
            ("fish", "tank"),
            ("time", "cat"),
            ("tank", "cat"),
        ]);

        let first = generate_chain(&g, 5, 100, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = generate_chain(&g, 5, 100, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_graph_fails_without_drawing() {
        let g = WordGraph::default();
        let mut rng = CountingRng::new(1);

        let err = ChainSampler::default().generate(&g, &mut rng).unwrap_err();

        assert_eq!(err, WordChainError::EmptyCorpus);
        assert_eq!(rng.draws, 0);
    }

    #[test]
    fn test_all_dead_ends_exhaust_attempts() {
        // Every key leads to a word with no outgoing edges.
        let g = graph(&[("one", "two"), ("three", "four")]);
        let mut rng = StdRng::seed_from_u64(3);

        let err = generate_chain(&g, 5, 25, &mut rng).unwrap_err();
        assert_eq!(err, WordChainError::ChainExhausted { attempts: 25 });
    }

    #[test]
    fn test_zero_out_degree_chain_exhausted_after_max_attempts() {
        let g = graph(&[("solo", "ghost")]);
        let sampler = ChainSampler::new(5, DEFAULT_MAX_ATTEMPTS);

        let err = sampler
            .generate(&g, &mut StdRng::seed_from_u64(9))
            .unwrap_err();
        assert!(err.is_chain_exhausted());
        assert_eq!(err, WordChainError::chain_exhausted(DEFAULT_MAX_ATTEMPTS));
    }

    #[test]
    fn test_exhaustion_runs_exactly_max_attempts_walks() {
        let g = graph(&[("one", "two")]);
        let words: Vec<&str> = g.words().collect();
        let sampler = ChainSampler::new(5, 37);
        let mut rng = StdRng::seed_from_u64(4);
        let mut walks = 0;

        let err = sampler
            .run_walks(|| {
                walks += 1;
                sampler.walk(&g, &words, &mut rng)
            })
            .unwrap_err();

        assert_eq!(walks, 37);
        assert_eq!(err, WordChainError::ChainExhausted { attempts: 37 });
    }

    #[test]
    fn test_walks_stop_at_first_success() {
        let sampler = ChainSampler::new(1, 10);
        let mut walks = 0;

        let (chain, used) = sampler
            .run_walks(|| {
                walks += 1;
                (walks == 4).then(|| Chain::new(vec!["found".to_string()]))
            })
            .unwrap();

        assert_eq!(walks, 4);
        assert_eq!(used, 4);
        assert_eq!(chain.words(), ["found"]);
    }

    #[test]
    fn test_zero_budget_runs_no_walks() {
        let sampler = ChainSampler::new(5, 0);
        let mut walks = 0;

        let err = sampler
            .run_walks(|| {
                walks += 1;
                None
            })
            .unwrap_err();

        assert_eq!(walks, 0);
        assert_eq!(err, WordChainError::ChainExhausted { attempts: 0 });
    }

    #[test]
    fn test_single_word_chain_needs_no_edges() {
        let g = graph(&[("lonely", "end")]);
        let chain = generate_chain(&g, 1, 1, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(chain.words(), ["lonely"]);
    }

    #[test]
    fn test_counted_reports_walks_used() {
        let g = graph(&[("sun", "flower"), ("flower", "pot"), ("pot", "sun")]);
        let (_, used) = ChainSampler::default()
            .generate_counted(&g, &mut StdRng::seed_from_u64(5))
            .unwrap();
        // Every walk in a cycle succeeds.
        assert_eq!(used, 1);
    }

    #[test]
    fn test_weighted_duplicates_favour_repeated_edge() {
        let g = graph(&[
            ("go", "up"),
            ("go", "up"),
            ("go", "up"),
            ("go", "down"),
        ]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut ups = 0;
        for _ in 0..400 {
            let chain = generate_chain(&g, 2, 1, &mut rng).unwrap();
            if chain.get(1) == Some("up") {
                ups += 1;
            }
        }
        // Expected ~300 of 400.
        assert!(ups > 240 && ups < 360, "ups = {ups}");
    }
}
