//! The round state machine.

use super::event::{GameEvent, Outcome};
use super::model::{CellKind, GameStatus, LetterCell, MAX_GUESSES, WordProgress, WordState};
use crate::chain::{CHAIN_LENGTH, Chain, INTERIOR_WORDS};
use crate::error::{Result, WordChainError};
use crate::validation::validate;
use serde::{Deserialize, Serialize};

/// Client-held state for one round of the game.
///
/// Endpoints of the chain are always visible; the player guesses the three
/// interior words in order. Exactly one event is applied at a time.
///
/// Deserialization runs the same shape checks as [`GameSession::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct GameSession {
    chain: Chain,
    words: Vec<WordProgress>,
    current_word_index: usize,
    status: GameStatus,
}

#[derive(Deserialize)]
struct SessionSnapshot {
    chain: Chain,
    words: Vec<WordProgress>,
    current_word_index: usize,
    status: GameStatus,
}

impl TryFrom<SessionSnapshot> for GameSession {
    type Error = WordChainError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self> {
        let mut session = Self::new(snapshot.chain)?;
        if snapshot.words.len() != INTERIOR_WORDS {
            return Err(WordChainError::invalid_request(format!(
                "session must track {} words, got {}",
                INTERIOR_WORDS,
                snapshot.words.len()
            )));
        }
        if snapshot.current_word_index >= INTERIOR_WORDS {
            return Err(WordChainError::invalid_request(format!(
                "active word index {} out of range",
                snapshot.current_word_index
            )));
        }
        session.words = snapshot.words;
        session.current_word_index = snapshot.current_word_index;
        session.status = snapshot.status;
        Ok(session)
    }
}

impl GameSession {
    /// Starts a round for a freshly received chain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` when the chain does not hold exactly five words.
    pub fn new(chain: Chain) -> Result<Self> {
        if chain.len() != CHAIN_LENGTH {
            return Err(WordChainError::invalid_request(format!(
                "chain must have {} words, got {}",
                CHAIN_LENGTH,
                chain.len()
            )));
        }
        Ok(Self {
            chain,
            words: vec![WordProgress::default(); INTERIOR_WORDS],
            current_word_index: 0,
            status: GameStatus::Playing,
        })
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    pub fn progress(&self, index: usize) -> Option<&WordProgress> {
        self.words.get(index)
    }

    pub fn word_state(&self, index: usize) -> Option<WordState> {
        self.words.get(index).map(WordProgress::state)
    }

    /// Attempts used on the active word.
    pub fn current_attempts(&self) -> u32 {
        self.words[self.current_word_index].attempts
    }

    /// Upper-cased answer for interior word `index`.
    pub fn answer(&self, index: usize) -> Option<String> {
        self.chain.interior(index).map(str::to_uppercase)
    }

    fn expected_len(&self, index: usize) -> usize {
        self.chain
            .interior(index)
            .map(|w| w.chars().count())
            .unwrap_or(0)
    }

    /// Pure form of [`apply`](Self::apply).
    pub fn transition(mut self, event: GameEvent) -> (Self, Outcome) {
        let outcome = self.apply(event);
        (self, outcome)
    }

    /// Applies one input event to the active word.
    pub fn apply(&mut self, event: GameEvent) -> Outcome {
        if self.status.is_over() || self.words[self.current_word_index].complete {
            return Outcome::Ignored;
        }
        match event {
            GameEvent::Char(c) => self.type_char(c),
            GameEvent::Backspace => self.backspace(),
            GameEvent::Submit => self.submit(),
        }
    }

    fn type_char(&mut self, c: char) -> Outcome {
        let max_len = self.expected_len(self.current_word_index);
        let word = &mut self.words[self.current_word_index];
        if !c.is_ascii_alphabetic() || word.typed_len() >= max_len {
            return Outcome::Ignored;
        }
        word.typed.push(c.to_ascii_uppercase());
        Outcome::Typed
    }

    fn backspace(&mut self) -> Outcome {
        match self.words[self.current_word_index].typed.pop() {
            Some(_) => Outcome::Erased,
            None => Outcome::Ignored,
        }
    }

    fn submit(&mut self) -> Outcome {
        let index = self.current_word_index;
        let Some(expected) = self.chain.interior(index).map(str::to_string) else {
            return Outcome::Ignored;
        };
        let max_len = expected.chars().count();
        let word = &mut self.words[index];
        if word.typed_len() != max_len {
            return Outcome::Ignored;
        }

        word.attempts += 1;

        if validate(&word.typed, &expected) {
            word.complete = true;
            if index + 1 < INTERIOR_WORDS {
                self.current_word_index = index + 1;
                return Outcome::Advanced { next: index + 1 };
            }
            self.status = GameStatus::Won;
            return Outcome::Won;
        }

        if word.attempts >= MAX_GUESSES {
            self.status = GameStatus::Lost;
            return Outcome::Lost;
        }

        word.revealed = (word.revealed + 1).min(max_len);
        word.typed.clear();
        Outcome::Retry {
            attempts_left: MAX_GUESSES - word.attempts,
            revealed: word.revealed,
        }
    }

    /// Letter boxes for chain position `position` (0..=4).
    ///
    /// Typed letters take precedence over hint letters. Solved words, and
    /// every interior word once the round is lost, show the full answer.
    pub fn letters(&self, position: usize) -> Vec<LetterCell> {
        let Some(word) = self.chain.get(position) else {
            return Vec::new();
        };
        let upper: Vec<char> = word.to_uppercase().chars().collect();

        if position == 0 || position + 1 == self.chain.len() {
            return upper
                .into_iter()
                .map(|c| LetterCell::new(c, CellKind::Fixed))
                .collect();
        }

        let progress = &self.words[position - 1];
        if progress.complete {
            return upper
                .into_iter()
                .map(|c| LetterCell::new(c, CellKind::Solved))
                .collect();
        }
        if self.status == GameStatus::Lost {
            return upper
                .into_iter()
                .map(|c| LetterCell::new(c, CellKind::Exposed))
                .collect();
        }

        let typed: Vec<char> = progress.typed.chars().collect();
        upper
            .iter()
            .enumerate()
            .map(|(i, answer)| match typed.get(i) {
                Some(&t) => LetterCell::new(t, CellKind::Typed),
                None if i < progress.revealed => LetterCell::new(*answer, CellKind::Revealed),
                None => LetterCell::empty(),
            })
            .collect()
    }
}
