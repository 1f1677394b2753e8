pub mod config_service;
pub mod dto;
pub mod memory_word_pair_repository;
pub mod paths;
pub mod storage;
pub mod toml_word_pair_repository;

pub use crate::config_service::ConfigService;
pub use crate::memory_word_pair_repository::InMemoryWordPairRepository;
pub use crate::paths::WordChainPaths;
pub use crate::toml_word_pair_repository::TomlWordPairRepository;
