//! Configuration models.
//!
//! These are plain serde structures; reading them from disk and applying
//! environment overrides lives in the infrastructure layer.

use crate::chain::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub server: HttpConfig,
    pub game: GameConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. `"*"` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl HttpConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_allowed_origins
            .iter()
            .any(|o| o == "*" || o == origin)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Random walks tried per new game before giving up.
    pub max_attempts: usize,
    /// Seconds a built graph may be reused. 0 rebuilds on every request.
    pub graph_cache_ttl_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            graph_cache_ttl_secs: 0,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Word pair file. `None` resolves to the default location.
    pub word_pairs_path: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.server.bind_address(), "127.0.0.1:3001");
        assert_eq!(config.game.max_attempts, 100);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
[server]
port = 8080
cors_allowed_origins = ["http://localhost:3000"]

[game]
graph_cache_ttl_secs = 30
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.game.graph_cache_ttl_secs, 30);
        assert_eq!(config.game.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.server.allows_origin("http://localhost:3000"));
        assert!(!config.server.allows_origin("http://evil.example"));
    }

    #[test]
    fn test_wildcard_origin() {
        assert!(HttpConfig::default().allows_origin("http://anything"));
    }
}
