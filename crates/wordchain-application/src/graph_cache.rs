use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use wordchain_core::{Result, WordGraph};

struct CachedGraph {
    built_at: Instant,
    graph: Arc<WordGraph>,
}

/// Time-bounded cache for the most recently built [`WordGraph`].
///
/// Holds at most one graph. A stale entry is rebuilt and swapped in whole, so
/// readers never observe a partially built graph. A zero TTL disables caching
/// and every call builds afresh.
pub struct GraphCache {
    ttl: Duration,
    entry: RwLock<Option<CachedGraph>>,
}

impl GraphCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached graph while fresh, otherwise runs `build` and
    /// stores its result.
    ///
    /// A failed build leaves the previous entry untouched.
    pub async fn get_or_build<F, Fut>(&self, build: F) -> Result<Arc<WordGraph>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<WordGraph>>,
    {
        if !self.is_enabled() {
            return build().await.map(Arc::new);
        }

        if let Some(graph) = self.fresh().await {
            tracing::trace!("[GraphCache] hit");
            return Ok(graph);
        }

        let graph = Arc::new(build().await?);
        *self.entry.write().await = Some(CachedGraph {
            built_at: Instant::now(),
            graph: graph.clone(),
        });
        tracing::debug!("[GraphCache] rebuilt graph with {} words", graph.len());
        Ok(graph)
    }

    /// Drops the cached graph.
    pub async fn invalidate(&self) {
        *self.entry.write().await = None;
    }

    async fn fresh(&self) -> Option<Arc<WordGraph>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|cached| cached.built_at.elapsed() < self.ttl)
            .map(|cached| cached.graph.clone())
    }
}

impl Default for GraphCache {
    fn default() -> Self {
        Self::disabled()
    }
}
