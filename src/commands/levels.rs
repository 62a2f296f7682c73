//! Level table command

use crate::core::{LEVEL_NAMES, Puzzle, get_levels, level_percent};

/// One row of a puzzle's level table
pub struct LevelRow {
    pub name: &'static str,
    pub threshold: u32,
    pub percent: f64,
}

/// Thresholds, names and bar positions for every tier of a puzzle
#[must_use]
pub fn level_table(puzzle: &Puzzle) -> Vec<LevelRow> {
    get_levels(puzzle)
        .values()
        .iter()
        .zip(LEVEL_NAMES)
        .enumerate()
        .map(|(index, (&threshold, name))| LevelRow {
            name,
            threshold,
            percent: level_percent(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn table_has_every_tier() {
        let catalog = Catalog::embedded().unwrap();
        let rows = level_table(catalog.get(0).unwrap());

        assert_eq!(rows.len(), LEVEL_NAMES.len());
        assert_eq!(rows[0].name, "beginner");
        assert_eq!(rows[0].threshold, 0);
        assert_eq!(rows[8].threshold, 120); // floor(201 * 0.6)
        assert!((rows[8].percent - 100.0).abs() < f64::EPSILON);
    }
}
