//! Word check command
//!
//! Validates a single word against a puzzle as if nothing had been found yet.

use crate::catalog::Catalog;
use crate::core::{Verdict, is_pangram, score_word, validate};

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub game: usize,
    pub verdict: Verdict,
    pub points: u32,
    pub pangram: bool,
}

/// Check `word` against puzzle `game`
///
/// The word is lowercased and trimmed first, as a player's typing would be.
///
/// # Errors
///
/// Returns an error if `game` is not a catalog index.
pub fn check_word(catalog: &Catalog, game: usize, word: &str) -> Result<CheckResult, String> {
    let puzzle = catalog
        .get(game)
        .ok_or_else(|| format!("Puzzle #{game} not in catalog ({} puzzles)", catalog.len()))?;

    let word = word.trim().to_lowercase();
    let found: &[&str] = &[];
    let verdict = validate(Some(puzzle), found, &word);
    let accepted = verdict.is_accepted();

    Ok(CheckResult {
        points: if accepted { score_word(&word) } else { 0 },
        pangram: accepted && is_pangram(&word),
        word,
        game,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_valid_word() {
        let catalog = Catalog::embedded().unwrap();
        let result = check_word(&catalog, 0, "Appealing ").unwrap();

        assert_eq!(result.word, "appealing");
        assert_eq!(result.verdict, Verdict::Accepted);
        assert_eq!(result.points, 16);
        assert!(result.pangram);
    }

    #[test]
    fn check_rejected_word() {
        let catalog = Catalog::embedded().unwrap();
        let result = check_word(&catalog, 0, "pipe").unwrap();

        assert_eq!(result.verdict, Verdict::MissingCentre);
        assert_eq!(result.points, 0);
        assert!(!result.pangram);
    }

    #[test]
    fn check_unknown_puzzle() {
        let catalog = Catalog::embedded().unwrap();
        assert!(check_word(&catalog, 999, "pale").is_err());
    }
}
