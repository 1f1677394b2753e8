//! TOML-based word pair repository implementation.
//!
//! Stores every pair in a single `word_pairs.toml` as `[[pair]]` tables.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::task;
use wordchain_core::{
    WordPair, WordPairRepository,
    error::{Result, WordChainError},
};

use crate::dto::{WordPairDto, WordPairsDocument};
use crate::storage::{AtomicTomlError, AtomicTomlFile};

/// TOML-file word pair repository.
///
/// # Features
///
/// - **Atomic writes**: tmp file + fsync + rename via [`AtomicTomlFile`]
/// - **Locked updates**: `add_all` runs as a locked read-modify-write
/// - **Async-safe**: file access runs in `tokio::task::spawn_blocking`
///
/// A missing store file is reported as
/// [`WordChainError::DataSourceUnavailable`]; an existing but blank file is an
/// empty corpus.
pub struct TomlWordPairRepository {
    path: PathBuf,
}

impl TomlWordPairRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file(path: PathBuf) -> AtomicTomlFile<WordPairsDocument> {
        AtomicTomlFile::new(path)
    }

    fn load_sync(path: PathBuf) -> Result<Vec<WordPair>> {
        if !path.exists() {
            return Err(WordChainError::data_source_unavailable(format!(
                "Word pair store not found at {}",
                path.display()
            )));
        }

        match Self::file(path.clone()).load() {
            Ok(doc) => Ok(doc.unwrap_or_default().into_pairs()),
            Err(AtomicTomlError::Io(e)) => Err(WordChainError::data_source_unavailable(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
            Err(e) => Err(e.into()),
        }
    }

    fn check_sync(path: PathBuf) -> Result<()> {
        if !path.is_file() {
            return Err(WordChainError::data_source_unavailable(format!(
                "Word pair store not found at {}",
                path.display()
            )));
        }
        std::fs::File::open(&path).map_err(|e| {
            WordChainError::data_source_unavailable(format!(
                "Cannot open {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(())
    }

    fn add_all_sync(path: PathBuf, pairs: Vec<WordPairDto>) -> Result<usize> {
        let added = pairs.len();
        Self::file(path).update(WordPairsDocument::default(), move |doc| {
            doc.pairs.extend(pairs);
        })?;
        Ok(added)
    }

    fn clear_sync(path: PathBuf) -> Result<()> {
        Self::file(path).save(&WordPairsDocument::default())?;
        Ok(())
    }
}

fn join_error(e: task::JoinError) -> WordChainError {
    WordChainError::io(format!("Failed to spawn blocking task: {}", e))
}

#[async_trait]
impl WordPairRepository for TomlWordPairRepository {
    async fn list_all(&self) -> Result<Vec<WordPair>> {
        let path = self.path.clone();
        let pairs = task::spawn_blocking(move || Self::load_sync(path))
            .await
            .map_err(join_error)??;

        tracing::debug!(
            "[TomlWordPairRepository] Loaded {} pairs from {}",
            pairs.len(),
            self.path.display()
        );
        Ok(pairs)
    }

    async fn check_available(&self) -> Result<()> {
        let path = self.path.clone();
        task::spawn_blocking(move || Self::check_sync(path))
            .await
            .map_err(join_error)?
    }

    async fn add_all(&self, pairs: &[WordPair]) -> Result<usize> {
        let path = self.path.clone();
        let dtos: Vec<WordPairDto> = pairs.iter().map(WordPairDto::from).collect();
        task::spawn_blocking(move || Self::add_all_sync(path, dtos))
            .await
            .map_err(join_error)?
    }

    async fn clear(&self) -> Result<()> {
        let path = self.path.clone();
        task::spawn_blocking(move || Self::clear_sync(path))
            .await
            .map_err(join_error)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> TomlWordPairRepository {
        TomlWordPairRepository::new(dir.path().join("word_pairs.toml"))
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let err = repo.list_all().await.unwrap_err();
        assert!(err.is_data_source_unavailable());
        let err = repo.check_available().await.unwrap_err();
        assert!(err.is_data_source_unavailable());
    }

    #[tokio::test]
    async fn test_blank_file_is_empty_corpus() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        std::fs::write(repo.path(), "").unwrap();

        repo.check_available().await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let added = repo
            .add_all(&[
                WordPair::new("straw", "berry"),
                WordPair::new("berry", "jam"),
            ])
            .await
            .unwrap();
        assert_eq!(added, 2);

        repo.add_all(&[WordPair::new("jam", "session")])
            .await
            .unwrap();

        let pairs = repo.list_all().await.unwrap();
        assert_eq!(
            pairs,
            vec![
                WordPair::new("straw", "berry"),
                WordPair::new("berry", "jam"),
                WordPair::new("jam", "session"),
            ]
        );
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        repo.add_all(&[WordPair::new("a", "b"), WordPair::new("a", "b")])
            .await
            .unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_clear_leaves_an_available_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        repo.add_all(&[WordPair::new("a", "b")]).await.unwrap();

        repo.clear().await.unwrap();

        repo.check_available().await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        std::fs::write(repo.path(), "[[pair]]\nfirst_word = ").unwrap();

        let err = repo.list_all().await.unwrap_err();
        assert!(matches!(err, WordChainError::Serialization { .. }));
    }
}
