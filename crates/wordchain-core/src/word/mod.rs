//! Word pair domain module.
//!
//! # Module Structure
//!
//! - `model`: The stored association record (`WordPair`)
//! - `repository`: Repository trait for the word-pair data source
//!
//! # Usage
//!
//! ```ignore
//! use wordchain_core::word::{WordPair, WordPairRepository};
//! ```

mod model;
pub mod repository;

// Re-export public API
pub use model::WordPair;
pub use repository::WordPairRepository;
