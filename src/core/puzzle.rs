//! Puzzle definition
//!
//! A puzzle is a centre letter, six distinct edge letters, the dictionary of
//! valid answers and the maximum achievable score. Construction checks every
//! invariant, so the rest of the engine can trust a `Puzzle` as given.

use super::letters::LetterSet;
use super::score::score_word;
use super::verdict::MIN_WORD_LENGTH;
use rustc_hash::FxHashSet;
use std::fmt;

/// Number of letters around the centre
pub const EDGE_LETTERS: usize = 6;

/// A single spelling-bee puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    centre: u8,
    edge: String,
    letters: LetterSet,
    answers: Vec<String>,
    answer_set: FxHashSet<String>,
    high: u32,
}

/// Error type for malformed puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    InvalidCentre(char),
    InvalidEdge(String),
    CentreInEdge(char),
    InvalidAnswer(String),
    AnswerTooShort(String),
    AnswerMissingCentre(String),
    AnswerOutsideLetters(String),
    DuplicateAnswer(String),
    HighMismatch { declared: u32, computed: u32 },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCentre(c) => write!(f, "Centre must be a lowercase letter, got '{c}'"),
            Self::InvalidEdge(edge) => {
                write!(f, "Edge must be {EDGE_LETTERS} distinct lowercase letters, got '{edge}'")
            }
            Self::CentreInEdge(c) => write!(f, "Centre letter '{c}' also appears in the edge"),
            Self::InvalidAnswer(word) => {
                write!(f, "Answer '{word}' must contain only lowercase ASCII letters")
            }
            Self::AnswerTooShort(word) => {
                write!(f, "Answer '{word}' is shorter than {MIN_WORD_LENGTH} letters")
            }
            Self::AnswerMissingCentre(word) => {
                write!(f, "Answer '{word}' does not use the centre letter")
            }
            Self::AnswerOutsideLetters(word) => {
                write!(f, "Answer '{word}' uses letters outside the puzzle")
            }
            Self::DuplicateAnswer(word) => write!(f, "Answer '{word}' is listed twice"),
            Self::HighMismatch { declared, computed } => write!(
                f,
                "Declared high score {declared} does not match the answers' total {computed}"
            ),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl Puzzle {
    /// Create a puzzle, checking every invariant
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - the centre is not a lowercase ASCII letter
    /// - the edge is not six distinct lowercase letters, or contains the centre
    /// - an answer is not lowercase ASCII, is too short, lacks the centre,
    ///   uses other letters, or is repeated
    /// - `high` differs from the total score of the answers
    ///
    /// # Examples
    /// ```
    /// use spelltogether::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new('t', "abcdef", ["date", "cadet"], 6).unwrap();
    /// assert_eq!(puzzle.high(), 6);
    ///
    /// assert!(Puzzle::new('t', "abcdef", ["date"], 6).is_err());
    /// ```
    pub fn new<I, S>(centre: char, edge: &str, answers: I, high: u32) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !centre.is_ascii_lowercase() {
            return Err(PuzzleError::InvalidCentre(centre));
        }
        let centre_byte = centre as u8;

        let edge_set = LetterSet::from_word(edge)
            .filter(|set| set.len() == EDGE_LETTERS && edge.len() == EDGE_LETTERS)
            .ok_or_else(|| PuzzleError::InvalidEdge(edge.to_string()))?;
        if edge_set.contains(centre_byte) {
            return Err(PuzzleError::CentreInEdge(centre));
        }

        let mut letters = edge_set;
        letters.insert(centre_byte);

        let mut list = Vec::new();
        let mut answer_set = FxHashSet::default();
        for answer in answers {
            let answer: String = answer.into();
            let Some(used) = LetterSet::from_word(&answer) else {
                return Err(PuzzleError::InvalidAnswer(answer));
            };
            if answer.len() < MIN_WORD_LENGTH {
                return Err(PuzzleError::AnswerTooShort(answer));
            }
            if !used.contains(centre_byte) {
                return Err(PuzzleError::AnswerMissingCentre(answer));
            }
            if !letters.is_superset_of(used) {
                return Err(PuzzleError::AnswerOutsideLetters(answer));
            }
            if !answer_set.insert(answer.clone()) {
                return Err(PuzzleError::DuplicateAnswer(answer));
            }
            list.push(answer);
        }

        let computed: u32 = list.iter().map(|word| score_word(word)).sum();
        if computed != high {
            return Err(PuzzleError::HighMismatch {
                declared: high,
                computed,
            });
        }

        Ok(Self {
            centre: centre_byte,
            edge: edge.to_string(),
            letters,
            answers: list,
            answer_set,
            high,
        })
    }

    /// The required letter
    #[inline]
    #[must_use]
    pub const fn centre(&self) -> char {
        self.centre as char
    }

    #[inline]
    #[must_use]
    pub(crate) const fn centre_byte(&self) -> u8 {
        self.centre
    }

    /// The six surrounding letters in display order
    #[inline]
    #[must_use]
    pub fn edge(&self) -> &str {
        &self.edge
    }

    /// Centre and edge letters together
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Valid answers in catalog order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub fn is_answer(&self, word: &str) -> bool {
        self.answer_set.contains(word)
    }

    /// Maximum achievable score
    #[inline]
    #[must_use]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Answers that use all seven letters
    pub fn pangrams(&self) -> impl Iterator<Item = &str> {
        self.answers
            .iter()
            .map(String::as_str)
            .filter(|word| super::score::is_pangram(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_puzzle() {
        let puzzle = Puzzle::new('a', "lepign", ["leaping", "plain", "pale"], 20).unwrap();
        assert_eq!(puzzle.centre(), 'a');
        assert_eq!(puzzle.edge(), "lepign");
        assert_eq!(puzzle.letters().len(), 7);
        assert_eq!(puzzle.answers(), &["leaping", "plain", "pale"]);
        assert!(puzzle.is_answer("plain"));
        assert!(!puzzle.is_answer("plane"));
        assert_eq!(puzzle.pangrams().collect::<Vec<_>>(), vec!["leaping"]);
    }

    #[test]
    fn empty_answers_need_zero_high() {
        let puzzle = Puzzle::new('a', "lepign", Vec::<String>::new(), 0).unwrap();
        assert_eq!(puzzle.high(), 0);
        assert!(puzzle.answers().is_empty());
    }

    #[test]
    fn rejects_bad_centre() {
        assert_eq!(
            Puzzle::new('A', "lepign", ["pale"], 1),
            Err(PuzzleError::InvalidCentre('A'))
        );
        assert!(Puzzle::new('1', "lepign", ["pale"], 1).is_err());
    }

    #[test]
    fn rejects_bad_edge() {
        assert!(matches!(
            Puzzle::new('a', "lepig", ["pale"], 1),
            Err(PuzzleError::InvalidEdge(_))
        ));
        assert!(matches!(
            Puzzle::new('a', "lepigg", ["pale"], 1),
            Err(PuzzleError::InvalidEdge(_))
        ));
        assert!(matches!(
            Puzzle::new('a', "LEPIGN", ["pale"], 1),
            Err(PuzzleError::InvalidEdge(_))
        ));
        assert_eq!(
            Puzzle::new('a', "lepiga", ["pale"], 1),
            Err(PuzzleError::CentreInEdge('a'))
        );
    }

    #[test]
    fn rejects_bad_answers() {
        assert_eq!(
            Puzzle::new('a', "lepign", ["Pale"], 1),
            Err(PuzzleError::InvalidAnswer("Pale".into()))
        );
        assert_eq!(
            Puzzle::new('a', "lepign", ["pal"], 3),
            Err(PuzzleError::AnswerTooShort("pal".into()))
        );
        assert_eq!(
            Puzzle::new('a', "lepign", ["pipe"], 1),
            Err(PuzzleError::AnswerMissingCentre("pipe".into()))
        );
        assert_eq!(
            Puzzle::new('a', "lepign", ["plait"], 5),
            Err(PuzzleError::AnswerOutsideLetters("plait".into()))
        );
        assert_eq!(
            Puzzle::new('a', "lepign", ["pale", "pale"], 2),
            Err(PuzzleError::DuplicateAnswer("pale".into()))
        );
    }

    #[test]
    fn rejects_wrong_high() {
        assert_eq!(
            Puzzle::new('a', "lepign", ["pale", "plain"], 7),
            Err(PuzzleError::HighMismatch {
                declared: 7,
                computed: 6
            })
        );
    }

    #[test]
    fn error_display() {
        let err = PuzzleError::HighMismatch {
            declared: 7,
            computed: 6,
        };
        assert_eq!(
            err.to_string(),
            "Declared high score 7 does not match the answers' total 6"
        );
    }
}
