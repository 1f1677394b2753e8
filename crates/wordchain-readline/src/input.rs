//! Line input to game events.

use wordchain_core::GameSession;
use wordchain_core::game::{GameEvent, Outcome};

pub const COMMANDS: &[&str] = &["/new", "/help", "/quit"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Quit,
    NewGame,
    Help,
    Guess(String),
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "quit" | "exit" | "/quit" | "/exit" => Command::Quit,
        "/new" => Command::NewGame,
        "/help" | "?" => Command::Help,
        _ => Command::Guess(trimmed.to_string()),
    }
}

/// Events that replace whatever is typed on the active word with `guess`
/// and submit it.
pub fn guess_events(session: &GameSession, guess: &str) -> Vec<GameEvent> {
    let typed = session
        .progress(session.current_word_index())
        .map(|p| p.typed_len())
        .unwrap_or(0);

    std::iter::repeat_n(GameEvent::Backspace, typed)
        .chain(guess.chars().map(GameEvent::Char))
        .chain(std::iter::once(GameEvent::Submit))
        .collect()
}

/// Letter count of the active word, if the round is still playable.
pub fn expected_len(session: &GameSession) -> Option<usize> {
    if session.status().is_over() {
        return None;
    }
    session
        .chain()
        .interior(session.current_word_index())
        .map(|w| w.chars().count())
}

/// Feeds one guess through the session and returns the outcome of the
/// submit.
///
/// Non-letters are dropped. A guess whose letter count differs from the
/// active word is `Ignored` without touching the session.
pub fn play_guess(session: &mut GameSession, guess: &str) -> Outcome {
    let letters = guess.chars().filter(|c| c.is_ascii_alphabetic()).count();
    if expected_len(session) != Some(letters) {
        return Outcome::Ignored;
    }

    let mut last = Outcome::Ignored;
    for event in guess_events(session, guess) {
        last = session.apply(event);
    }
    last
}
