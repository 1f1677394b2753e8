//! Input events and transition results.

use serde::{Deserialize, Serialize};

/// Input delivered to the active word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum GameEvent {
    /// A key press carrying a character.
    Char(char),
    /// Remove the last typed letter.
    Backspace,
    /// Submit the typed letters as a guess.
    Submit,
}

/// What a single event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// The event was not accepted; state is unchanged.
    Ignored,
    /// A letter was appended to the active word.
    Typed,
    /// The last letter was removed.
    Erased,
    /// Correct guess; the next interior word is now active.
    Advanced { next: usize },
    /// Correct guess on the last interior word.
    Won,
    /// Wrong guess with guesses left; one more letter is revealed.
    Retry { attempts_left: u32, revealed: usize },
    /// Wrong guess that used the last attempt.
    Lost,
}

impl Outcome {
    /// Whether the event changed the session.
    pub fn changed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
