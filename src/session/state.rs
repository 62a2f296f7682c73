//! Shared session record
//!
//! The document every participant of a session reads and writes. Only the
//! fields the engine needs are modelled; merging concurrent writes is the
//! store's job.

use crate::catalog::Catalog;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Replicated state of one play session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Words found so far, in discovery order, without repeats
    #[serde(default)]
    pub found: Vec<String>,
    /// Index into the puzzle catalog
    pub game: usize,
    /// Set once the game is forfeited or fully solved; never cleared
    #[serde(default)]
    pub over: bool,
}

/// Lifecycle of a session as seen by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    InProgress,
    Complete,
}

impl Phase {
    /// Phase of a possibly not-yet-loaded session
    #[must_use]
    pub fn of(state: Option<&GameState>) -> Self {
        match state {
            None => Self::Loading,
            Some(state) if state.over => Self::Complete,
            Some(_) => Self::InProgress,
        }
    }
}

impl GameState {
    /// Fresh session for a given puzzle
    #[must_use]
    pub const fn new(game: usize) -> Self {
        Self {
            found: Vec::new(),
            game,
            over: false,
        }
    }

    /// Fresh session for a puzzle drawn uniformly from the catalog
    pub fn random<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Self {
        Self::new(catalog.random_index(rng))
    }

    /// Record a found word, returning `false` if it was already there
    pub fn append(&mut self, word: &str) -> bool {
        if self.found.iter().any(|w| w == word) {
            return false;
        }
        self.found.push(word.to_string());
        true
    }

    /// Mark the session finished
    pub fn mark_over(&mut self) {
        self.over = true;
    }
}
