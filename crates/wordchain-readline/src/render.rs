//! Board rendering for the terminal.

use colored::{ColoredString, Colorize};
use wordchain_core::GameSession;
use wordchain_core::game::{CellKind, LetterCell, MAX_GUESSES, Outcome, WordState};

const EMPTY_CELL: char = '_';

fn cell_char(cell: &LetterCell) -> char {
    cell.letter.unwrap_or(EMPTY_CELL)
}

/// Letters separated by spaces, blanks as `_`.
pub fn plain_word(cells: &[LetterCell]) -> String {
    cells
        .iter()
        .map(|c| cell_char(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn paint(cell: &LetterCell) -> ColoredString {
    let text = cell_char(cell).to_string();
    match cell.kind {
        CellKind::Fixed => text.bright_white().bold(),
        CellKind::Typed => text.bright_cyan(),
        CellKind::Revealed => text.yellow(),
        CellKind::Solved => text.bright_green().bold(),
        CellKind::Exposed => text.red(),
        CellKind::Empty => text.bright_black(),
    }
}

pub fn colored_word(cells: &[LetterCell]) -> String {
    cells
        .iter()
        .map(|c| paint(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Row marker for chain position `position`.
pub fn marker(session: &GameSession, position: usize) -> &'static str {
    let last = session.chain().len().saturating_sub(1);
    if position == 0 || position == last {
        return " ";
    }
    let index = position - 1;
    match session.word_state(index) {
        Some(WordState::Correct) => "✓",
        Some(WordState::Failed) => "✗",
        _ if index == session.current_word_index() && !session.status().is_over() => "▶",
        _ => " ",
    }
}

/// One line per chain word.
pub fn board(session: &GameSession) -> Vec<String> {
    (0..session.chain().len())
        .map(|position| {
            format!(
                "  {} {}",
                marker(session, position),
                colored_word(&session.letters(position))
            )
        })
        .collect()
}

pub fn status_line(session: &GameSession) -> String {
    format!(
        "Word {} of 3 | Attempts: {} / {}",
        session.current_word_index() + 1,
        session.current_attempts(),
        MAX_GUESSES
    )
}

pub fn hints_line(hints: &[String]) -> String {
    let letters: Vec<String> = hints.iter().map(|h| h.to_uppercase()).collect();
    format!("Hints: {}", letters.join(", "))
}

/// The interior answers joined for the end-of-round summary.
pub fn answers(session: &GameSession) -> String {
    (0..3)
        .filter_map(|i| session.answer(i))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Feedback for the result of a submitted guess.
pub fn outcome_message(
    outcome: Outcome,
    session: &GameSession,
    expected_len: Option<usize>,
) -> String {
    match outcome {
        Outcome::Advanced { next } => format!("Correct! On to word {} of 3.", next + 1),
        Outcome::Won => "🎉 You solved the chain!".to_string(),
        Outcome::Retry {
            attempts_left,
            revealed,
        } => format!(
            "Not quite. {} attempt(s) left, {} letter(s) revealed.",
            attempts_left, revealed
        ),
        Outcome::Lost => format!("Game over! The words were: {}", answers(session)),
        Outcome::Ignored => match expected_len {
            Some(n) => format!("The word has {} letters.", n),
            None => "The round is over. Type /new for another chain.".to_string(),
        },
        Outcome::Typed | Outcome::Erased => String::new(),
    }
}
