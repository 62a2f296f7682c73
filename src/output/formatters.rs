//! Formatting utilities for terminal output

use crate::core::{Puzzle, Verdict};

/// Icon and message for a rejected guess, `None` for an accepted one
#[must_use]
pub const fn verdict_message(verdict: Verdict) -> Option<(&'static str, &'static str)> {
    match verdict {
        Verdict::TooEarly => Some(("⏳", "game not started yet")),
        Verdict::InvalidLetters => Some(("🙊", "bad letters")),
        Verdict::AlreadyFound => Some(("😳", "already guessed!")),
        Verdict::TooShort => Some(("🙊", "too small")),
        Verdict::MissingCentre => Some(("🙉", "where's the centre letter mate?")),
        Verdict::NotInDictionary => Some(("🙈", "not in word list, sorry :c")),
        Verdict::Accepted => None,
    }
}

/// Icon and message for an accepted word
#[must_use]
pub fn acceptance_message(word: &str, points: u32, pangram: bool) -> (&'static str, String) {
    let length = word.chars().count();
    if pangram {
        ("🤩", format!("PANGRAM!!! {points} points"))
    } else if length > 7 {
        ("😋", format!("yummy! {points} points"))
    } else if length > 4 {
        ("😊", format!("nice! {points} points"))
    } else if points == 1 {
        ("😃", "1 point".to_string())
    } else {
        ("😌", format!("nice. {points} points"))
    }
}

/// One-line hive, e.g. `lep[a]ngi`
///
/// The first three edge letters, the bracketed centre, then the last three
/// edge letters reversed.
#[must_use]
pub fn hive_banner(puzzle: &Puzzle) -> String {
    let edge: Vec<char> = puzzle.edge().chars().collect();
    let mut banner: String = edge[..3].iter().collect();
    banner.push('[');
    banner.push(puzzle.centre());
    banner.push(']');
    banner.extend(edge[3..].iter().rev());
    banner
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        width
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rejection_has_a_message() {
        for verdict in [
            Verdict::TooEarly,
            Verdict::InvalidLetters,
            Verdict::AlreadyFound,
            Verdict::TooShort,
            Verdict::MissingCentre,
            Verdict::NotInDictionary,
        ] {
            assert!(verdict_message(verdict).is_some(), "{verdict}");
        }
        assert!(verdict_message(Verdict::Accepted).is_none());
    }

    #[test]
    fn acceptance_tiers() {
        assert_eq!(acceptance_message("leaping", 14, true).1, "PANGRAM!!! 14 points");
        assert_eq!(acceptance_message("pineapple", 9, false).1, "yummy! 9 points");
        assert_eq!(acceptance_message("plain", 5, false).1, "nice! 5 points");
        assert_eq!(acceptance_message("pale", 1, false).1, "1 point");
    }

    #[test]
    fn hive_banner_layout() {
        let puzzle = Puzzle::new('a', "lepign", ["pale"], 1).unwrap();
        assert_eq!(hive_banner(&puzzle), "lep[a]ngi");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
