//! Simple line-mode game
//!
//! Text-based play without the TUI: type a word and press enter.

use crate::output::{print_board, print_game_over, print_submission};
use crate::session::{Game, SessionError, SessionId, SessionStore};
use colored::Colorize;
use rand::seq::SliceRandom;
use std::io::{self, Write};

/// Longest guess a player may type before it is thrown away
pub const MAX_GUESS_LEN: usize = 20;

/// Normalize raw typing into a guess
///
/// Lowercases, keeps only `a..=z`, and returns `None` for a guess longer
/// than `MAX_GUESS_LEN`.
///
/// # Examples
/// ```
/// use spelltogether::commands::normalize_guess;
///
/// assert_eq!(normalize_guess(" Plain!\n").as_deref(), Some("plain"));
/// assert_eq!(normalize_guess(&"a".repeat(21)), None);
/// ```
#[must_use]
pub fn normalize_guess(input: &str) -> Option<String> {
    let guess: String = input
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    (guess.len() <= MAX_GUESS_LEN).then_some(guess)
}

/// Prefix that marks a line as a command rather than a guess
pub const COMMAND_PREFIX: char = ':';

/// What one line typed in line mode asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Quit,
    Shuffle,
    Found,
    GiveUp,
    /// A `:` line naming no known command
    Unknown(String),
    Guess(String),
    /// A guess longer than `MAX_GUESS_LEN`
    TooBig,
}

/// Classify a line of line-mode input
///
/// Commands start with `:`, so any word, `found` included, can be guessed.
///
/// # Examples
/// ```
/// use spelltogether::commands::{LineInput, parse_line};
///
/// assert_eq!(parse_line(":q"), LineInput::Quit);
/// assert_eq!(parse_line("found"), LineInput::Guess("found".into()));
/// ```
#[must_use]
pub fn parse_line(input: &str) -> LineInput {
    let input = input.trim();
    if let Some(command) = input.strip_prefix(COMMAND_PREFIX) {
        return match command.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => LineInput::Quit,
            "shuffle" | "s" => LineInput::Shuffle,
            "found" | "f" => LineInput::Found,
            "giveup" => LineInput::GiveUp,
            other => LineInput::Unknown(other.to_string()),
        };
    }
    normalize_guess(input).map_or(LineInput::TooBig, LineInput::Guess)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// session store fails.
pub fn run_simple<S: SessionStore>(
    game: &mut Game<'_, S>,
    name: &str,
    session: &SessionId,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spelltogether - Line Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Hi {name}! Find words of 4+ letters that use the centre letter.");
    println!("Share session {} so friends can join.\n", session.as_str().bright_cyan());
    println!("Commands: ':shuffle', ':found', ':giveup', ':quit'\n");

    let mut edge: Vec<char> = game.puzzle().edge().chars().collect();
    let mut rng = rand::rng();

    loop {
        let state = game.sync().map_err(|e| e.to_string())?;
        if state.over {
            print_game_over(game).map_err(|e| e.to_string())?;
            return Ok(());
        }

        let tally = game.tally().map_err(|e| e.to_string())?;
        print_board(game.puzzle(), &edge, &tally, game.levels());

        let guess = match parse_line(&get_user_input("Word")?) {
            LineInput::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            LineInput::Shuffle => {
                edge.shuffle(&mut rng);
                continue;
            }
            LineInput::Found => {
                let found: Vec<&str> = state.found.iter().rev().map(String::as_str).collect();
                println!("\n{}\n", found.join(" ").bright_white());
                continue;
            }
            LineInput::GiveUp => {
                let sure = get_user_input(
                    "are you sure? this will end the game forever for everyone! (yes/no)",
                )?;
                if matches!(sure.to_lowercase().as_str(), "yes" | "y") {
                    game.forfeit().map_err(|e| e.to_string())?;
                }
                continue;
            }
            LineInput::Unknown(command) => {
                println!("{}", format!("unknown command ':{command}'").red());
                continue;
            }
            LineInput::TooBig => {
                println!("{}", "too big".red());
                continue;
            }
            LineInput::Guess(guess) if guess.is_empty() => continue,
            LineInput::Guess(guess) => guess,
        };

        match game.submit(&guess) {
            Ok(submission) => print_submission(&submission),
            Err(SessionError::Over) => {}
            Err(err) => return Err(err.to_string()),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("input closed".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_filters() {
        assert_eq!(normalize_guess("LEAPING").as_deref(), Some("leaping"));
        assert_eq!(normalize_guess("pl-ain 2").as_deref(), Some("plain"));
        assert_eq!(normalize_guess("").as_deref(), Some(""));
    }

    #[test]
    fn commands_need_prefix() {
        assert_eq!(parse_line(":quit"), LineInput::Quit);
        assert_eq!(parse_line(" :Exit "), LineInput::Quit);
        assert_eq!(parse_line(":s"), LineInput::Shuffle);
        assert_eq!(parse_line(":found"), LineInput::Found);
        assert_eq!(parse_line(":giveup"), LineInput::GiveUp);
        assert_eq!(parse_line(":dance"), LineInput::Unknown("dance".into()));
    }

    #[test]
    fn command_words_can_be_guessed() {
        for word in ["found", "quit", "exit", "shuffle", "giveup"] {
            assert_eq!(parse_line(word), LineInput::Guess(word.to_string()), "{word}");
        }
    }

    #[test]
    fn command_word_answer_is_accepted() {
        use crate::core::{Puzzle, Verdict};
        use crate::session::{GameState, MemoryStore};

        let puzzle = Puzzle::new('o', "fundxy", ["found", "fond"], 6).unwrap();
        let mut game = Game::new(&puzzle, MemoryStore::new(GameState::new(0)));

        let LineInput::Guess(guess) = parse_line("found") else {
            panic!("expected a guess");
        };
        assert_eq!(game.submit(&guess).unwrap().verdict, Verdict::Accepted);
    }

    #[test]
    fn long_lines_are_too_big() {
        assert_eq!(parse_line(&"p".repeat(MAX_GUESS_LEN + 1)), LineInput::TooBig);
        assert_eq!(parse_line("  "), LineInput::Guess(String::new()));
    }

    #[test]
    fn normalize_rejects_long_guesses() {
        assert!(normalize_guess(&"p".repeat(MAX_GUESS_LEN)).is_some());
        assert!(normalize_guess(&"p".repeat(MAX_GUESS_LEN + 1)).is_none());
    }
}
