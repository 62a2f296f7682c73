//! Guess validation
//!
//! Checks run in a fixed order and the first failing check wins, so a short
//! word with foreign letters reports `InvalidLetters`, not `TooShort`.

use super::letters::LetterSet;
use super::puzzle::Puzzle;
use std::fmt;

/// Minimum length of an acceptable word
pub const MIN_WORD_LENGTH: usize = 4;

/// Outcome of validating a guess against a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// No puzzle loaded yet
    TooEarly,
    /// Uses a letter outside the puzzle
    InvalidLetters,
    AlreadyFound,
    /// Shorter than `MIN_WORD_LENGTH`
    TooShort,
    /// Does not use the centre letter
    MissingCentre,
    NotInDictionary,
    Accepted,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TooEarly => "too early",
            Self::InvalidLetters => "invalid letters",
            Self::AlreadyFound => "already found",
            Self::TooShort => "too short",
            Self::MissingCentre => "missing centre",
            Self::NotInDictionary => "not in dictionary",
            Self::Accepted => "accepted",
        };
        f.write_str(label)
    }
}

/// Validate `candidate` against `puzzle` given the words already found
///
/// `puzzle` is `None` while the game is still loading. No normalization is
/// applied: callers pass lowercase input.
///
/// # Examples
/// ```
/// use spelltogether::core::{Puzzle, Verdict, validate};
///
/// let puzzle = Puzzle::new('t', "abcdef", ["date", "cadet"], 6).unwrap();
///
/// assert_eq!(validate(Some(&puzzle), &["date"], "cadet"), Verdict::Accepted);
/// assert_eq!(validate(Some(&puzzle), &["date"], "date"), Verdict::AlreadyFound);
/// assert_eq!(validate(Some(&puzzle), &[] as &[&str], "zzz"), Verdict::InvalidLetters);
/// assert_eq!(validate(None, &[] as &[&str], "date"), Verdict::TooEarly);
/// ```
#[must_use]
pub fn validate<S: AsRef<str>>(puzzle: Option<&Puzzle>, found: &[S], candidate: &str) -> Verdict {
    let Some(puzzle) = puzzle else {
        return Verdict::TooEarly;
    };

    let allowed = puzzle.letters();
    let uses_allowed = LetterSet::from_word(candidate).is_some_and(|set| allowed.is_superset_of(set));
    if !uses_allowed {
        return Verdict::InvalidLetters;
    }

    if found.iter().any(|word| word.as_ref() == candidate) {
        return Verdict::AlreadyFound;
    }

    if candidate.len() < MIN_WORD_LENGTH {
        return Verdict::TooShort;
    }

    if !candidate.bytes().any(|b| b == puzzle.centre_byte()) {
        return Verdict::MissingCentre;
    }

    if !puzzle.is_answer(candidate) {
        return Verdict::NotInDictionary;
    }

    Verdict::Accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Puzzle {
        Puzzle::new('t', "abcdef", ["date", "cadet"], 6).unwrap()
    }

    const NONE: &[&str] = &[];

    #[test]
    fn accepts_dictionary_word() {
        let puzzle = sample();
        assert_eq!(validate(Some(&puzzle), NONE, "date"), Verdict::Accepted);
        assert_eq!(validate(Some(&puzzle), NONE, "cadet"), Verdict::Accepted);
    }

    #[test]
    fn too_early_without_puzzle() {
        assert_eq!(validate(None, NONE, "date"), Verdict::TooEarly);
        assert_eq!(validate(None, NONE, "zzz"), Verdict::TooEarly);
    }

    #[test]
    fn invalid_letters() {
        let puzzle = sample();
        assert_eq!(validate(Some(&puzzle), NONE, "zzz"), Verdict::InvalidLetters);
        assert_eq!(validate(Some(&puzzle), NONE, "dates"), Verdict::InvalidLetters);
        // No case folding
        assert_eq!(validate(Some(&puzzle), NONE, "Date"), Verdict::InvalidLetters);
    }

    #[test]
    fn already_found() {
        let puzzle = sample();
        assert_eq!(validate(Some(&puzzle), &["cat"], "cat"), Verdict::AlreadyFound);
        assert_eq!(validate(Some(&puzzle), &["date"], "date"), Verdict::AlreadyFound);
    }

    #[test]
    fn too_short() {
        let puzzle = sample();
        assert_eq!(validate(Some(&puzzle), NONE, "cat"), Verdict::TooShort);
        assert_eq!(validate(Some(&puzzle), NONE, ""), Verdict::TooShort);
    }

    #[test]
    fn missing_centre() {
        let puzzle = sample();
        assert_eq!(validate(Some(&puzzle), NONE, "faced"), Verdict::MissingCentre);
    }

    #[test]
    fn not_in_dictionary() {
        let puzzle = sample();
        assert_eq!(validate(Some(&puzzle), NONE, "tabbed"), Verdict::NotInDictionary);
    }

    #[test]
    fn letter_check_precedes_length_check() {
        let puzzle = sample();
        assert_eq!(validate(Some(&puzzle), NONE, "tz"), Verdict::InvalidLetters);
    }

    #[test]
    fn found_check_precedes_length_check() {
        let puzzle = sample();
        assert_eq!(validate(Some(&puzzle), &["bat"], "bat"), Verdict::AlreadyFound);
    }

    #[test]
    fn validation_is_idempotent() {
        let puzzle = sample();
        let found = ["date"];
        for candidate in ["date", "cadet", "zzz", "cat", "faced", "tabbed"] {
            let first = validate(Some(&puzzle), &found, candidate);
            let second = validate(Some(&puzzle), &found, candidate);
            assert_eq!(first, second, "{candidate}");
        }
    }
}
