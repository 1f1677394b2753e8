//! Game use case implementation.
//!
//! `GameUseCase` is everything the HTTP shell needs: it reads the corpus,
//! builds (or reuses) the word graph, samples a chain and checks guesses.
//! It holds no per-game state.

use crate::graph_cache::GraphCache;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use wordchain_core::config::GameConfig;
use wordchain_core::{
    Chain, ChainSampler, Result, WordChainError, WordGraph, WordPairRepository, validate,
};

/// Message returned when a validation request lacks a field.
pub const MISSING_FIELDS: &str = "Missing required fields";

/// A freshly generated round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub chain: Chain,
    pub first_word: String,
    pub last_word: String,
    /// First letter of each interior word.
    pub hints: Vec<String>,
}

impl NewGame {
    fn from_chain(chain: Chain) -> Self {
        let first_word = chain.first().unwrap_or_default().to_string();
        let last_word = chain.last().unwrap_or_default().to_string();
        let hints = chain.hints();
        Self {
            chain,
            first_word,
            last_word,
            hints,
        }
    }
}

/// Raw validation input. Every field is optional so that absence can be
/// reported as a request error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub word: Option<String>,
    pub position: Option<i64>,
    pub chain: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordValidation {
    pub valid: bool,
    /// The expected word at the requested position, lower-cased.
    pub correct_word: String,
}

pub struct GameUseCase {
    repository: Arc<dyn WordPairRepository>,
    sampler: ChainSampler,
    graph_cache: GraphCache,
}

impl GameUseCase {
    /// Creates a use case that rebuilds the graph on every new game.
    pub fn new(repository: Arc<dyn WordPairRepository>, sampler: ChainSampler) -> Self {
        Self {
            repository,
            sampler,
            graph_cache: GraphCache::disabled(),
        }
    }

    /// Creates a use case from the `[game]` configuration section.
    pub fn from_config(repository: Arc<dyn WordPairRepository>, config: &GameConfig) -> Self {
        let sampler = ChainSampler {
            max_attempts: config.max_attempts,
            ..ChainSampler::default()
        };
        Self::new(repository, sampler)
            .with_graph_cache_ttl(Duration::from_secs(config.graph_cache_ttl_secs))
    }

    pub fn with_graph_cache_ttl(mut self, ttl: Duration) -> Self {
        self.graph_cache = GraphCache::new(ttl);
        self
    }

    pub fn sampler(&self) -> ChainSampler {
        self.sampler
    }

    /// Probes the data source. Used once at startup.
    pub async fn check_available(&self) -> Result<()> {
        self.repository.check_available().await
    }

    /// Generates a new round using the thread-local random source.
    pub async fn new_game(&self) -> Result<NewGame> {
        let graph = self.graph().await?;
        self.sample(&graph, &mut rand::thread_rng())
    }

    /// Generates a new round drawing randomness from `rng`.
    pub async fn new_game_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<NewGame> {
        let graph = self.graph().await?;
        self.sample(&graph, rng)
    }

    /// Checks a guess against the word at `position` of the submitted chain.
    ///
    /// # Errors
    ///
    /// [`WordChainError::InvalidRequest`] when `word` is missing or empty,
    /// `chain` or `position` is missing, or `position` is outside the chain.
    pub fn validate_word(&self, request: ValidateRequest) -> Result<WordValidation> {
        let (word, position, chain) = match request {
            ValidateRequest {
                word: Some(word),
                position: Some(position),
                chain: Some(chain),
            } if !word.is_empty() => (word, position, chain),
            _ => return Err(WordChainError::invalid_request(MISSING_FIELDS)),
        };

        let expected = usize::try_from(position)
            .ok()
            .and_then(|index| chain.get(index))
            .ok_or_else(|| {
                WordChainError::invalid_request(format!(
                    "Position {} is out of range for a chain of {} words",
                    position,
                    chain.len()
                ))
            })?;

        Ok(WordValidation {
            valid: validate(&word, expected),
            correct_word: expected.to_lowercase(),
        })
    }

    async fn graph(&self) -> Result<Arc<WordGraph>> {
        let repository = self.repository.clone();
        self.graph_cache
            .get_or_build(|| async move {
                let pairs = repository.list_all().await?;
                Ok(WordGraph::from_pairs(&pairs))
            })
            .await
    }

    fn sample<R: Rng + ?Sized>(&self, graph: &WordGraph, rng: &mut R) -> Result<NewGame> {
        match self.sampler.generate_counted(graph, rng) {
            Ok((chain, attempts)) => {
                tracing::debug!(
                    "[GameUseCase] Generated chain of {} words after {} attempt(s)",
                    chain.len(),
                    attempts
                );
                Ok(NewGame::from_chain(chain))
            }
            Err(e) => {
                tracing::warn!("[GameUseCase] Chain generation failed: {}", e);
                Err(e)
            }
        }
    }
}
