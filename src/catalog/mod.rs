//! Puzzle catalog
//!
//! The static list of puzzles a session indexes into. The built-in catalog is
//! compiled into the binary; a JSON catalog can be loaded at runtime instead.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLES_COUNT, RawPuzzle};

use crate::core::{Puzzle, PuzzleError};
use rand::Rng;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Where the puzzles come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl CatalogSource {
    /// Interpret a `--catalog` value: "embedded" or a path
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Error type for catalog loading
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Parse(serde_json::Error),
    Puzzle { index: usize, source: PuzzleError },
    Empty,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read catalog: {err}"),
            Self::Parse(err) => write!(f, "Failed to parse catalog: {err}"),
            Self::Puzzle { index, source } => write!(f, "Puzzle #{index} is invalid: {source}"),
            Self::Empty => write!(f, "Catalog contains no puzzles"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Puzzle { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// A non-empty, indexable list of puzzles
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Wrap already-validated puzzles
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if there are no puzzles.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { puzzles })
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Puzzle` if an embedded entry is malformed.
    ///
    /// # Examples
    /// ```
    /// use spelltogether::catalog::{Catalog, PUZZLES_COUNT};
    ///
    /// let catalog = Catalog::embedded().unwrap();
    /// assert_eq!(catalog.len(), PUZZLES_COUNT);
    /// ```
    pub fn embedded() -> Result<Self, CatalogError> {
        let puzzles = PUZZLES
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                loader::puzzle_from_raw(raw).map_err(|source| CatalogError::Puzzle { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(puzzles)
    }

    /// Load a JSON catalog file
    ///
    /// # Errors
    ///
    /// See `loader::load_from_file`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::new(loader::load_from_file(path)?)
    }

    /// Open the catalog named by `source`
    ///
    /// # Errors
    ///
    /// Returns any error from loading the chosen source.
    pub fn open(source: &CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::Embedded => Self::embedded(),
            CatalogSource::File(path) => Self::from_json_file(path),
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false: construction rejects empty catalogs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Draw a puzzle index uniformly from `[0, len)`
    pub fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.puzzles.len())
    }
}
