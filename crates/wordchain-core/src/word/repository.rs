//! Word pair repository trait.
//!
//! Defines the interface the game uses to read its corpus.

use super::model::WordPair;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract data source for word pairs.
///
/// This trait decouples graph construction from the storage mechanism
/// (TOML file, in-memory fixture, remote database).
///
/// # Implementation Notes
///
/// `list_all` carries no filtering, pagination or ordering guarantees.
/// Unreachable storage must surface as
/// [`WordChainError::DataSourceUnavailable`](crate::WordChainError::DataSourceUnavailable).
#[async_trait]
pub trait WordPairRepository: Send + Sync {
    /// Returns every word pair currently stored.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<WordPair>)`: All stored pairs (possibly empty)
    /// - `Err(_)`: The data source could not be read
    async fn list_all(&self) -> Result<Vec<WordPair>>;

    /// Probes whether the data source is reachable.
    ///
    /// Called once at startup; a failure there is fatal.
    async fn check_available(&self) -> Result<()>;

    /// Appends pairs to the store.
    ///
    /// # Returns
    ///
    /// - `Ok(usize)`: Number of pairs added
    /// - `Err(_)`: Error occurred during save
    async fn add_all(&self, pairs: &[WordPair]) -> Result<usize>;

    /// Removes every stored pair.
    async fn clear(&self) -> Result<()>;
}
