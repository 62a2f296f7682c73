//! Word and game scoring
//!
//! Scoring rules:
//! - a 4-letter word scores 1
//! - a pangram (exactly 7 distinct letters) scores its length + 7
//! - any other word scores its length

use super::levels::{Levels, get_levels, level_index};
use super::puzzle::Puzzle;
use rustc_hash::FxHashSet;

/// Number of distinct letters that makes a word a pangram
pub const PANGRAM_LETTERS: usize = 7;

/// Bonus added to the length of a pangram
pub const PANGRAM_BONUS: u32 = 7;

/// Check whether a word uses exactly seven distinct letters
///
/// # Examples
/// ```
/// use spelltogether::core::is_pangram;
///
/// assert!(is_pangram("leaping"));
/// assert!(is_pangram("appealing"));
/// assert!(!is_pangram("plain"));
/// ```
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    word.chars().collect::<FxHashSet<char>>().len() == PANGRAM_LETTERS
}

/// Score a single, already-validated word
///
/// # Examples
/// ```
/// use spelltogether::core::score_word;
///
/// assert_eq!(score_word("pale"), 1);
/// assert_eq!(score_word("plain"), 5);
/// assert_eq!(score_word("leaping"), 14);
/// ```
#[must_use]
pub fn score_word(word: &str) -> u32 {
    let length = word.chars().count() as u32;
    if length == 4 {
        return 1;
    }
    if is_pangram(word) {
        return length + PANGRAM_BONUS;
    }
    length
}

/// Sum of `score_word` over every found word (0 for none)
#[must_use]
pub fn score_game<S: AsRef<str>>(found: &[S]) -> u32 {
    found.iter().map(|word| score_word(word.as_ref())).sum()
}

/// Where a set of found words stands against a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    pub high: u32,
    /// Index into `LEVEL_NAMES` (0-8)
    pub level: usize,
    /// The score has reached the puzzle's maximum
    pub complete: bool,
}

impl Tally {
    /// Score `found` against `puzzle`
    #[must_use]
    pub fn new<S: AsRef<str>>(puzzle: &Puzzle, found: &[S]) -> Self {
        Self::with_levels(&get_levels(puzzle), puzzle.high(), found)
    }

    /// Score `found` against precomputed thresholds
    #[must_use]
    pub fn with_levels<S: AsRef<str>>(levels: &Levels, high: u32, found: &[S]) -> Self {
        let score = score_game(found);
        let level = usize::try_from(level_index(levels, score)).unwrap_or(0);
        Self {
            score,
            high,
            level,
            complete: score == high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_letter_words_score_one() {
        for word in ["pale", "peal", "gala", "tool", "epic"] {
            assert_eq!(score_word(word), 1, "{word}");
        }
    }

    #[test]
    fn longer_words_score_length() {
        assert_eq!(score_word("plain"), 5);
        assert_eq!(score_word("pineal"), 6);
        assert_eq!(score_word("lineage"), 7); // 6 distinct letters
        assert_eq!(score_word("maintain"), 8);
    }

    #[test]
    fn pangrams_get_bonus() {
        assert_eq!(score_word("leaping"), 14);
        assert_eq!(score_word("appealing"), 16);
        assert_eq!(score_word("mountain"), 15);
    }

    #[test]
    fn pangram_needs_exactly_seven_letters() {
        assert!(is_pangram("abcdefg"));
        assert!(is_pangram("gfedcbaabc"));
        assert!(!is_pangram("abcdef"));
        assert!(!is_pangram("abcdefgh"));
        assert!(!is_pangram(""));
    }

    #[test]
    fn seven_distinct_letters_scores_length_plus_seven() {
        // c, a, d, b, e, t and a seventh letter
        let word = "cadbetx";
        assert!(is_pangram(word));
        assert_eq!(score_word(word), 14);
    }

    #[test]
    fn score_one_only_for_four_letters() {
        for word in ["pale", "plain", "pineal", "leaping", "appealing", "collect"] {
            assert_eq!(score_word(word) == 1, word.len() == 4, "{word}");
            assert!(score_word(word) >= 1);
        }
    }

    #[test]
    fn empty_game_scores_zero() {
        let found: [&str; 0] = [];
        assert_eq!(score_game(&found), 0);
    }

    #[test]
    fn game_score_is_sum_of_words() {
        assert_eq!(score_game(&["date"]), 1);
        assert_eq!(score_game(&["pale", "plain", "leaping"]), 1 + 5 + 14);

        let owned = vec!["pale".to_string(), "plain".to_string()];
        assert_eq!(score_game(&owned), 6);
    }

    #[test]
    fn tally_reports_completion() {
        let puzzle = Puzzle::new('t', "abcdef", ["date", "cadet"], 6).unwrap();

        let partial = Tally::new(&puzzle, &["date"]);
        assert_eq!(partial.score, 1);
        assert_eq!(partial.high, 6);
        assert!(!partial.complete);

        let full = Tally::new(&puzzle, &["date", "cadet"]);
        assert_eq!(full.score, 6);
        assert!(full.complete);
    }

    #[test]
    fn tally_level_follows_thresholds() {
        let levels = Levels::from_high(100);
        assert_eq!(Tally::with_levels(&levels, 100, &["pale"]).level, 0);

        let found = ["leaping", "plain"]; // 19 points
        assert_eq!(Tally::with_levels(&levels, 100, &found).level, 2);
    }
}
