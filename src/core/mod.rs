//! Puzzle scoring engine
//!
//! Pure functions over a puzzle and a list of found words: guess validation,
//! word and game scoring, and level thresholds. Nothing here performs I/O or
//! holds shared state, so every function is safe to call from any thread.

mod letters;
mod levels;
mod puzzle;
mod score;
mod verdict;

pub use letters::LetterSet;
pub use levels::{LEVEL_COUNT, LEVEL_NAMES, Levels, get_levels, level_index, level_percent};
pub use puzzle::{EDGE_LETTERS, Puzzle, PuzzleError};
pub use score::{PANGRAM_BONUS, PANGRAM_LETTERS, Tally, is_pangram, score_game, score_word};
pub use verdict::{MIN_WORD_LENGTH, Verdict, validate};
