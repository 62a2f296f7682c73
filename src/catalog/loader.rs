//! Catalog loading utilities
//!
//! Reads a JSON catalog (an array of `{centre, edge, answers, high}` entries)
//! or converts the embedded entries into validated puzzles.

use super::CatalogError;
use super::embedded::RawPuzzle;
use crate::core::{Puzzle, PuzzleError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One entry of a JSON catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub centre: String,
    pub edge: Edge,
    pub answers: Vec<String>,
    pub high: u32,
}

/// Edge letters, written either as one string or as a list of letters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Edge {
    Joined(String),
    Letters(Vec<String>),
}

impl Edge {
    fn joined(&self) -> String {
        match self {
            Self::Joined(edge) => edge.clone(),
            Self::Letters(letters) => letters.concat(),
        }
    }
}

impl CatalogEntry {
    /// Validate the entry into a puzzle
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError` if the entry breaks any puzzle invariant.
    pub fn to_puzzle(&self) -> Result<Puzzle, PuzzleError> {
        let centre = single_letter(&self.centre)?;
        Puzzle::new(
            centre,
            &self.edge.joined(),
            self.answers.iter().cloned(),
            self.high,
        )
    }
}

/// Parse a centre field, which must hold exactly one character
fn single_letter(text: &str) -> Result<char, PuzzleError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(PuzzleError::InvalidCentre(text.chars().next().unwrap_or(' '))),
    }
}

/// Convert an embedded entry into a puzzle
pub(super) fn puzzle_from_raw(raw: &RawPuzzle) -> Result<Puzzle, PuzzleError> {
    let centre = single_letter(raw.centre)?;
    Puzzle::new(centre, raw.edge, raw.answers.iter().copied(), raw.high)
}

/// Parse catalog entries from JSON text
///
/// # Errors
///
/// Returns `CatalogError::Parse` if the text is not a JSON array of entries,
/// or `CatalogError::Puzzle` for the first entry that fails validation.
///
/// # Examples
/// ```
/// use spelltogether::catalog::loader::parse_json;
///
/// let json = r#"[{"centre": "t", "edge": "abcdef", "answers": ["date", "cadet"], "high": 6}]"#;
/// let puzzles = parse_json(json).unwrap();
/// assert_eq!(puzzles.len(), 1);
/// assert_eq!(puzzles[0].high(), 6);
/// ```
pub fn parse_json(text: &str) -> Result<Vec<Puzzle>, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(text)?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .to_puzzle()
                .map_err(|source| CatalogError::Puzzle { index, source })
        })
        .collect()
}

/// Load puzzles from a JSON catalog file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise as `parse_json`.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Puzzle>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let puzzles = parse_json(&content)?;
    tracing::info!(path = %path.display(), count = puzzles.len(), "loaded puzzle catalog");
    Ok(puzzles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_joined_and_split_edges() {
        let json = r#"[
            {"centre": "t", "edge": "abcdef", "answers": ["date"], "high": 1},
            {"centre": "t", "edge": ["a", "b", "c", "d", "e", "f"], "answers": ["cadet"], "high": 5}
        ]"#;

        let puzzles = parse_json(json).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].edge(), "abcdef");
        assert_eq!(puzzles[1].edge(), "abcdef");
        assert_eq!(puzzles[1].high(), 5);
    }

    #[test]
    fn reports_index_of_bad_entry() {
        let json = r#"[
            {"centre": "t", "edge": "abcdef", "answers": ["date"], "high": 1},
            {"centre": "t", "edge": "abcdef", "answers": ["date"], "high": 9}
        ]"#;

        match parse_json(json) {
            Err(CatalogError::Puzzle { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(source, PuzzleError::HighMismatch { .. }));
            }
            other => panic!("expected puzzle error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_multi_letter_centre() {
        let json = r#"[{"centre": "ta", "edge": "bcdefg", "answers": [], "high": 0}]"#;
        assert!(matches!(
            parse_json(json),
            Err(CatalogError::Puzzle { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_json("{not json"), Err(CatalogError::Parse(_))));
        assert!(matches!(
            parse_json(r#"[{"centre": "t"}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"centre": "t", "edge": "abcdef", "answers": ["date", "cadet"], "high": 6}}]"#
        )
        .unwrap();

        let puzzles = load_from_file(file.path()).unwrap();
        assert_eq!(puzzles.len(), 1);
        assert!(puzzles[0].is_answer("cadet"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn entry_round_trips_through_serde() {
        let entry = CatalogEntry {
            centre: "t".into(),
            edge: Edge::Joined("abcdef".into()),
            answers: vec!["date".into()],
            high: 1,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"centre":"t","edge":"abcdef","answers":["date"],"high":1}"#
        );
    }
}
