//! Server configuration loading.
//!
//! Reads `ServerConfig` from TOML and layers `WORDCHAIN_*` environment
//! variables on top.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use wordchain_core::config::ServerConfig;
use wordchain_core::error::{Result, WordChainError};

use crate::paths::WordChainPaths;
use crate::storage::AtomicTomlFile;

pub const ENV_HOST: &str = "WORDCHAIN_HOST";
pub const ENV_PORT: &str = "WORDCHAIN_PORT";
pub const ENV_MAX_ATTEMPTS: &str = "WORDCHAIN_MAX_ATTEMPTS";
pub const ENV_GRAPH_CACHE_TTL_SECS: &str = "WORDCHAIN_GRAPH_CACHE_TTL_SECS";
pub const ENV_WORD_PAIRS: &str = "WORDCHAIN_WORD_PAIRS";
pub const ENV_LOG_JSON: &str = "WORDCHAIN_LOG_JSON";

pub struct ConfigService;

impl ConfigService {
    /// Loads configuration from `explicit` or the default config file, then
    /// applies process environment overrides.
    ///
    /// An explicitly named file must exist. The default file may be absent,
    /// in which case defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<ServerConfig> {
        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(WordChainError::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::load_file(path)?
            }
            None => match WordChainPaths::config_file() {
                Ok(path) => Self::load_file(&path)?,
                Err(e) => {
                    tracing::warn!("[Config] {}; using defaults", e);
                    ServerConfig::default()
                }
            },
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads one TOML file. Missing or blank files yield defaults.
    pub fn load_file(path: &Path) -> Result<ServerConfig> {
        let config = AtomicTomlFile::<ServerConfig>::new(path.to_path_buf())
            .load()
            .map_err(|e| {
                WordChainError::config(format!("Failed to load {}: {}", path.display(), e))
            })?
            .unwrap_or_default();

        tracing::debug!("[Config] Loaded {}", path.display());
        Ok(config)
    }

    /// Applies overrides from `lookup`, which maps variable names to values.
    ///
    /// Values that fail to parse are a `Config` error rather than silently
    /// ignored.
    pub fn apply_env_overrides<F>(config: &mut ServerConfig, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            config.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            config.server.port = parse_var(ENV_PORT, &port)?;
        }
        if let Some(max_attempts) = lookup(ENV_MAX_ATTEMPTS) {
            config.game.max_attempts = parse_var(ENV_MAX_ATTEMPTS, &max_attempts)?;
        }
        if let Some(ttl) = lookup(ENV_GRAPH_CACHE_TTL_SECS) {
            config.game.graph_cache_ttl_secs = parse_var(ENV_GRAPH_CACHE_TTL_SECS, &ttl)?;
        }
        if let Some(path) = lookup(ENV_WORD_PAIRS) {
            config.storage.word_pairs_path = Some(PathBuf::from(path));
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            config.logging.json = parse_bool(ENV_LOG_JSON, &json)?;
        }
        Ok(())
    }

    /// The word pair file this configuration points at.
    pub fn word_pairs_path(config: &ServerConfig) -> Result<PathBuf> {
        Ok(WordChainPaths::resolve_word_pairs(
            config.storage.word_pairs_path.as_ref(),
        )?)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| WordChainError::config(format!("Invalid {}={:?}: {}", key, value, e)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(WordChainError::config(format!(
            "Invalid {}={:?}: expected a boolean",
            key, value
        ))),
    }
}
