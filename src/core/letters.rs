//! Compact set of lowercase ASCII letters
//!
//! A `LetterSet` stores `a..=z` as bits of a `u32`, so superset tests and
//! distinct-letter counts are single integer operations.

use std::fmt;

/// A set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Bit for a single letter, `None` if the byte is not `a..=z`
    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_lowercase() {
            Some(1 << (letter - b'a'))
        } else {
            None
        }
    }

    /// Build the set of letters in `word`
    ///
    /// Returns `None` if the word contains anything other than `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use spelltogether::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("papal").unwrap();
    /// assert_eq!(set.len(), 3);
    /// assert!(LetterSet::from_word("Papal").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        word.bytes()
            .try_fold(0u32, |bits, b| Self::bit(b).map(|bit| bits | bit))
            .map(Self)
    }

    /// Insert a letter, returning `false` if it is not `a..=z`
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => {
                self.0 |= bit;
                true
            }
            None => false,
        }
    }

    /// Check membership of a single byte
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Check whether every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset_of(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = char> {
        (b'a'..=b'z')
            .filter(move |&b| self.contains(b))
            .map(char::from)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_collects_distinct_letters() {
        let set = LetterSet::from_word("appealing").unwrap();
        assert_eq!(set.len(), 7);
        assert_eq!(set.to_string(), "aegilnp");
    }

    #[test]
    fn from_word_rejects_non_lowercase() {
        assert!(LetterSet::from_word("Plain").is_none());
        assert!(LetterSet::from_word("pl4in").is_none());
        assert!(LetterSet::from_word("pla in").is_none());
        assert!(LetterSet::from_word("plaín").is_none());
    }

    #[test]
    fn empty_word_gives_empty_set() {
        let set = LetterSet::from_word("").unwrap();
        assert!(set.is_empty());
        assert_eq!(set, LetterSet::EMPTY);
    }

    #[test]
    fn superset_checks() {
        let puzzle = LetterSet::from_word("alepign").unwrap();
        let word = LetterSet::from_word("plain").unwrap();
        let other = LetterSet::from_word("plait").unwrap();

        assert!(puzzle.is_superset_of(word));
        assert!(!puzzle.is_superset_of(other));
        assert!(puzzle.is_superset_of(LetterSet::EMPTY));
        assert!(puzzle.is_superset_of(puzzle));
    }

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.insert(b'q'));
        assert!(!set.insert(b'Q'));
        assert!(!set.insert(b'-'));
        assert!(set.contains(b'q'));
        assert!(!set.contains(b'Q'));
        assert_eq!(set.len(), 1);
    }
}
