use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use wordchain_core::GameSession;
use wordchain_core::game::Outcome;
use wordchain_readline::input::{COMMANDS, expected_len, play_guess};
use wordchain_readline::{Command, DEFAULT_SERVER, GameClient, parse_line, render};

const START_FAILED: &str = "Failed to start game. Make sure the server is running!";

#[derive(Parser)]
#[command(name = "wordchain")]
#[command(about = "Play Word Chain in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Game server base URL
    #[arg(long, env = "WORDCHAIN_SERVER", default_value = DEFAULT_SERVER)]
    server: String,
}

/// Completion and hints for slash commands.
#[derive(Clone)]
struct GameHelper {
    commands: Vec<String>,
}

impl GameHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for GameHelper {}

impl Completer for GameHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for GameHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for GameHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for GameHelper {}

type GameEditor = Editor<GameHelper, DefaultHistory>;

enum RoundEnd {
    Quit,
    Next,
}

fn print_help() {
    let lines = [
        "Guess the three hidden words linking the first and last word.",
        "Type a guess and press Enter. Each miss reveals one more letter.",
        "Three misses on one word end the round.",
        "Commands: /new (new chain), /help, quit",
    ];
    for line in lines {
        println!("{}", line.bright_black());
    }
}

fn print_board(session: &GameSession, hints: &[String]) {
    println!();
    for line in render::board(session) {
        println!("{}", line);
    }
    println!();
    println!("{}", render::hints_line(hints).bright_black());
    if !session.status().is_over() {
        println!("{}", render::status_line(session).bright_black());
    }
}

/// Fetches a chain, offering a retry until one arrives or the player quits.
async fn start_round(
    client: &GameClient,
    rl: &mut GameEditor,
) -> Result<Option<(GameSession, Vec<String>)>> {
    loop {
        let started = match client.new_game().await {
            Ok(payload) => {
                let hints = payload.hints.clone();
                payload.into_session().map(|session| (session, hints))
            }
            Err(e) => Err(e),
        };

        match started {
            Ok(round) => return Ok(Some(round)),
            Err(e) => {
                eprintln!("{}", START_FAILED.red());
                eprintln!("{}", format!("  ({})", e).bright_black());
            }
        }

        match rl.readline("Press Enter to retry, or type quit: ") {
            Ok(line) if parse_line(&line) == Command::Quit => return Ok(None),
            Ok(_) => continue,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e.into()),
        }
    }
}

fn play_round(rl: &mut GameEditor, mut session: GameSession, hints: &[String]) -> Result<RoundEnd> {
    print_board(&session, hints);

    loop {
        if session.status().is_over() {
            match rl.readline("Play again? [Y/n] ") {
                Ok(line) => {
                    let answer = line.trim().to_ascii_lowercase();
                    if answer.is_empty() || answer.starts_with('y') || answer == "/new" {
                        return Ok(RoundEnd::Next);
                    }
                    return Ok(RoundEnd::Quit);
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    return Ok(RoundEnd::Quit);
                }
                Err(e) => return Err(e.into()),
            }
        }

        let line = match rl.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => return Ok(RoundEnd::Quit),
            Err(e) => return Err(e.into()),
        };

        match parse_line(&line) {
            Command::Empty => continue,
            Command::Quit => return Ok(RoundEnd::Quit),
            Command::NewGame => return Ok(RoundEnd::Next),
            Command::Help => print_help(),
            Command::Guess(guess) => {
                let _ = rl.add_history_entry(guess.as_str());
                let expected = expected_len(&session);
                let outcome = play_guess(&mut session, &guess);
                let message = render::outcome_message(outcome, &session, expected);

                let painted = match outcome {
                    Outcome::Advanced { .. } | Outcome::Won => message.bright_green(),
                    Outcome::Retry { .. } => message.yellow(),
                    Outcome::Lost => message.red(),
                    _ => message.bright_black(),
                };
                println!("{}", painted);

                if outcome.changed() {
                    print_board(&session, hints);
                }
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = GameClient::new(cli.server)?;

    let mut rl: GameEditor = Editor::new()?;
    rl.set_helper(Some(GameHelper::new()));

    println!("{}", "=== Word Chain ===".bright_magenta().bold());
    println!("{}", format!("Server: {}", client.base_url()).bright_black());
    print_help();

    loop {
        let Some((session, hints)) = start_round(&client, &mut rl).await? else {
            break;
        };
        match play_round(&mut rl, session, &hints)? {
            RoundEnd::Next => continue,
            RoundEnd::Quit => break,
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}
