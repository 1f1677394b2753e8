//! In-memory word pair repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use wordchain_core::{WordPair, WordPairRepository, error::Result};

/// Holds pairs in process memory. Always available.
///
/// Used for fixtures, demos and tests that need a real repository without
/// touching the filesystem.
#[derive(Default)]
pub struct InMemoryWordPairRepository {
    pairs: RwLock<Vec<WordPair>>,
}

impl InMemoryWordPairRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pairs(pairs: Vec<WordPair>) -> Self {
        Self {
            pairs: RwLock::new(pairs),
        }
    }
}

#[async_trait]
impl WordPairRepository for InMemoryWordPairRepository {
    async fn list_all(&self) -> Result<Vec<WordPair>> {
        Ok(self.pairs.read().await.clone())
    }

    async fn check_available(&self) -> Result<()> {
        Ok(())
    }

    async fn add_all(&self, pairs: &[WordPair]) -> Result<usize> {
        self.pairs.write().await.extend_from_slice(pairs);
        Ok(pairs.len())
    }

    async fn clear(&self) -> Result<()> {
        self.pairs.write().await.clear();
        Ok(())
    }
}
