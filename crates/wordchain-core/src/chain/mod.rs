//! Chain domain module.
//!
//! # Module Structure
//!
//! - `model`: The generated word sequence (`Chain`)
//! - `sampler`: Bounded-attempt random walk over a `WordGraph`

mod model;
pub mod sampler;

pub use model::{CHAIN_LENGTH, Chain, INTERIOR_WORDS};
pub use sampler::{ChainSampler, DEFAULT_MAX_ATTEMPTS, generate_chain};
