pub mod chain;
pub mod config;
pub mod error;
pub mod game;
pub mod graph;
pub mod validation;
pub mod word;

// Re-export common types
pub use chain::{Chain, ChainSampler};
pub use error::{Result, WordChainError};
pub use game::{GameEvent, GameSession, GameStatus};
pub use graph::WordGraph;
pub use validation::validate;
pub use word::{WordPair, WordPairRepository};

/// Builds a graph from `pairs` and samples one chain from it.
///
/// The whole generation pipeline as one call, for callers that hold the
/// pairs already.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use wordchain_core::{new_chain, ChainSampler, WordPair};
///
/// let pairs = vec![
///     WordPair::new("Sun", "Flower"),
///     WordPair::new("Flower", "Pot"),
///     WordPair::new("Pot", "Sun"),
/// ];
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let chain = new_chain(&pairs, ChainSampler::default(), &mut rng).unwrap();
/// assert_eq!(chain.len(), 5);
/// ```
pub fn new_chain<R: rand::Rng + ?Sized>(
    pairs: &[WordPair],
    sampler: ChainSampler,
    rng: &mut R,
) -> Result<Chain> {
    let graph = WordGraph::from_pairs(pairs);
    sampler.generate(&graph, rng)
}
