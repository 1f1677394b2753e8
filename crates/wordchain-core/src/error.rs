//! Error types for the Word Chain game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Word Chain workspace.
///
/// Variants map onto the conditions a game request can end in; the HTTP
/// layer turns each one into a status code and a `{ success: false }` body.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordChainError {
    /// The data source holds no usable starting words.
    #[error("No word pairs in database")]
    EmptyCorpus,

    /// Every sampling attempt hit a dead end before reaching the target length.
    #[error("Could not generate valid chain after {attempts} attempts")]
    ChainExhausted { attempts: usize },

    /// A request is missing required fields or carries invalid ones.
    #[error("{0}")]
    InvalidRequest(String),

    /// The word-pair store cannot be reached or read.
    #[error("Data source unavailable: {0}")]
    DataSourceUnavailable(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl WordChainError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a ChainExhausted error
    pub fn chain_exhausted(attempts: usize) -> Self {
        Self::ChainExhausted { attempts }
    }

    /// Creates an InvalidRequest error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Creates a DataSourceUnavailable error
    pub fn data_source_unavailable(message: impl Into<String>) -> Self {
        Self::DataSourceUnavailable(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an EmptyCorpus error
    pub fn is_empty_corpus(&self) -> bool {
        matches!(self, Self::EmptyCorpus)
    }

    /// Check if this is a ChainExhausted error
    pub fn is_chain_exhausted(&self) -> bool {
        matches!(self, Self::ChainExhausted { .. })
    }

    /// Check if this is an InvalidRequest error
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Check if this is a DataSourceUnavailable error
    pub fn is_data_source_unavailable(&self) -> bool {
        matches!(self, Self::DataSourceUnavailable(_))
    }

    /// Returns true for the conditions raised while generating a chain.
    ///
    /// These are reported to the player as a failed game start; no retry is
    /// attempted on their behalf.
    pub fn is_generation_failure(&self) -> bool {
        self.is_empty_corpus() || self.is_chain_exhausted()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for WordChainError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for WordChainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for WordChainError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for WordChainError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, WordChainError>`.
pub type Result<T> = std::result::Result<T, WordChainError>;
