//! Game session model types.

use serde::{Deserialize, Serialize};

/// Guesses allowed per interior word before the round is lost.
pub const MAX_GUESSES: u32 = 3;

/// Overall state of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The player is still guessing.
    Playing,
    /// All interior words were guessed.
    Won,
    /// An interior word used up its guesses.
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Derived state of a single interior word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordState {
    Pending,
    Correct,
    Failed,
}

/// Progress on one interior word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordProgress {
    /// Letters typed so far, upper case.
    pub typed: String,
    /// Leading letters of the answer shown as hints. Starts at 1.
    pub revealed: usize,
    /// Submitted guesses.
    pub attempts: u32,
    /// Set once guessed correctly.
    pub complete: bool,
}

impl Default for WordProgress {
    fn default() -> Self {
        Self {
            typed: String::new(),
            revealed: 1,
            attempts: 0,
            complete: false,
        }
    }
}

impl WordProgress {
    pub fn state(&self) -> WordState {
        if self.complete {
            WordState::Correct
        } else if self.attempts >= MAX_GUESSES {
            WordState::Failed
        } else {
            WordState::Pending
        }
    }

    pub fn typed_len(&self) -> usize {
        self.typed.chars().count()
    }
}

/// How a letter box should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Endpoint word, always visible.
    Fixed,
    /// Typed by the player.
    Typed,
    /// Hint letter from the answer.
    Revealed,
    /// Part of a correctly guessed word.
    Solved,
    /// Answer shown after the round was lost.
    Exposed,
    /// Nothing to show yet.
    Empty,
}

/// One letter box of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCell {
    pub letter: Option<char>,
    pub kind: CellKind,
}

impl LetterCell {
    pub fn new(letter: char, kind: CellKind) -> Self {
        Self {
            letter: Some(letter),
            kind,
        }
    }

    pub fn empty() -> Self {
        Self {
            letter: None,
            kind: CellKind::Empty,
        }
    }
}
