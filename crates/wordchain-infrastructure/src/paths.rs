//! Path resolution for wordchain files.
//!
//! ```text
//! ~/.config/wordchain/
//! ├── config.toml        # Server configuration
//! └── word_pairs.toml    # Default word-pair store
//! ```

use std::path::PathBuf;
use thiserror::Error;
use wordchain_core::WordChainError;

const APP_DIR: &str = "wordchain";
const CONFIG_FILE: &str = "config.toml";
const WORD_PAIRS_FILE: &str = "word_pairs.toml";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Neither a platform config directory nor a home directory exists.
    #[error("Cannot find config or home directory")]
    HomeDirNotFound,
}

impl From<PathError> for WordChainError {
    fn from(err: PathError) -> Self {
        WordChainError::config(err.to_string())
    }
}

pub struct WordChainPaths;

impl WordChainPaths {
    /// Returns the wordchain configuration directory.
    ///
    /// Falls back to `~/.config` when the platform has no config directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|base| base.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn word_pairs_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(WORD_PAIRS_FILE))
    }

    /// Uses `configured` when present, the default store location otherwise.
    pub fn resolve_word_pairs(configured: Option<&PathBuf>) -> Result<PathBuf, PathError> {
        match configured {
            Some(path) => Ok(path.clone()),
            None => Self::word_pairs_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        let Ok(dir) = WordChainPaths::config_dir() else {
            return;
        };
        assert!(dir.ends_with("wordchain"));
        assert_eq!(
            WordChainPaths::config_file().unwrap(),
            dir.join("config.toml")
        );
        assert_eq!(
            WordChainPaths::word_pairs_file().unwrap(),
            dir.join("word_pairs.toml")
        );
    }

    #[test]
    fn test_configured_path_wins() {
        let custom = PathBuf::from("/tmp/custom_pairs.toml");
        assert_eq!(
            WordChainPaths::resolve_word_pairs(Some(&custom)).unwrap(),
            custom
        );
    }
}
