//! Progress level thresholds
//!
//! A puzzle's maximum score is split into nine tiers. The raw boundaries are
//! fixed fractions of `high` plus an absolute 5-point tier; for small puzzles
//! several fractions floor to the same integer, so colliding boundaries are
//! pushed upwards until all nine are distinct.

use super::puzzle::Puzzle;

/// Number of progress tiers
pub const LEVEL_COUNT: usize = 9;

/// Display names for each tier, lowest first
pub const LEVEL_NAMES: [&str; LEVEL_COUNT] = [
    "beginner",
    "ok let's go",
    "now we're talking",
    "v nice",
    "pretty cool",
    "sick",
    "yay!",
    "omg!!",
    "wow!! you're amazing",
];

/// Fractions of `high` used for the upper tiers
const HIGH_FRACTIONS: [f64; 7] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.55, 0.6];

/// Absolute score of the second tier
const FIXED_TIER: u32 = 5;

/// Nine strictly increasing score thresholds starting at 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Levels([u32; LEVEL_COUNT]);

impl Levels {
    /// Derive thresholds from a maximum achievable score
    ///
    /// # Examples
    /// ```
    /// use spelltogether::core::Levels;
    ///
    /// let levels = Levels::from_high(100);
    /// assert_eq!(levels.values(), &[0, 5, 10, 20, 30, 40, 50, 55, 60]);
    ///
    /// // Small puzzles still get nine distinct tiers
    /// let levels = Levels::from_high(5);
    /// assert_eq!(levels.values(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    /// ```
    #[must_use]
    pub fn from_high(high: u32) -> Self {
        let high = f64::from(high);

        let mut values = [0u32; LEVEL_COUNT];
        values[1] = FIXED_TIER;
        for (slot, fraction) in values[2..].iter_mut().zip(HIGH_FRACTIONS) {
            *slot = (high * fraction).floor() as u32;
        }
        values.sort_unstable();

        for i in 1..LEVEL_COUNT {
            while values[i] <= values[i - 1] {
                values[i] += 1;
            }
        }

        let min = values[0];
        for value in &mut values {
            *value -= min;
        }

        Self(values)
    }

    #[inline]
    #[must_use]
    pub const fn values(&self) -> &[u32; LEVEL_COUNT] {
        &self.0
    }

    /// Threshold of the top tier
    #[inline]
    #[must_use]
    pub const fn top(&self) -> u32 {
        self.0[LEVEL_COUNT - 1]
    }

    /// Tier index for a score, clamped to `0..LEVEL_COUNT`
    #[must_use]
    pub fn index_of(&self, score: u32) -> usize {
        usize::try_from(level_index(self, score)).unwrap_or(0)
    }

    /// Tier name for a score
    #[must_use]
    pub fn name_of(&self, score: u32) -> &'static str {
        LEVEL_NAMES[self.index_of(score)]
    }
}

/// Thresholds for a puzzle, derived from its `high` score
#[must_use]
pub fn get_levels(puzzle: &Puzzle) -> Levels {
    Levels::from_high(puzzle.high())
}

/// Count of thresholds at or below `score`, minus one
///
/// Only returns -1 for a score below the first threshold, which cannot
/// happen for thresholds built by `Levels::from_high`.
#[must_use]
pub fn level_index(levels: &Levels, score: u32) -> i32 {
    levels.values().iter().filter(|&&v| v <= score).count() as i32 - 1
}

/// Position of a tier on a 0-100 progress bar
#[must_use]
pub fn level_percent(index: usize) -> f64 {
    let steps = (LEVEL_COUNT - 1) as f64;
    index.min(LEVEL_COUNT - 1) as f64 * 100.0 / steps
}
