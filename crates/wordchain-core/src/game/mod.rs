//! Game session domain module.
//!
//! Client-held state for one round: which interior word is active, how many
//! letters each word reveals, and whether the round is won or lost. The rules
//! are independent of any UI so they can be driven from a terminal, a browser
//! bridge, or a test.
//!
//! # Module Structure
//!
//! - `model`: Per-word progress and status types
//! - `event`: Input events and transition outcomes
//! - `session`: The state machine (`GameSession`)

mod event;
mod model;
mod session;

pub use event::{GameEvent, Outcome};
pub use model::{CellKind, GameStatus, LetterCell, MAX_GUESSES, WordProgress, WordState};
pub use session::GameSession;
