//! A puzzle bound to its shared session
//!
//! `Game` is the engine's caller: it validates guesses against the current
//! record, applies the resulting delta through the store, and reports when
//! the score reaches the puzzle's maximum.

use super::SessionError;
use super::state::{GameState, Phase};
use super::store::SessionStore;
use crate::catalog::Catalog;
use crate::core::{Levels, Puzzle, Tally, Verdict, get_levels, is_pangram, score_word, validate};

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub word: String,
    pub verdict: Verdict,
    /// Points earned, 0 unless accepted
    pub points: u32,
    pub pangram: bool,
    /// Standing after the guess
    pub tally: Tally,
    /// This guess finished the puzzle
    pub completed: bool,
}

/// One puzzle and the store holding its session
#[derive(Debug)]
pub struct Game<'p, S> {
    puzzle: &'p Puzzle,
    levels: Levels,
    store: S,
}

impl<'p, S: SessionStore> Game<'p, S> {
    #[must_use]
    pub fn new(puzzle: &'p Puzzle, store: S) -> Self {
        Self {
            puzzle,
            levels: get_levels(puzzle),
            store,
        }
    }

    /// Bind a store to the catalog puzzle its record names
    ///
    /// A record that already holds the maximum score is marked over.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownGame` if the index is outside the catalog,
    /// or any error from loading the record.
    pub fn open(catalog: &'p Catalog, store: S) -> Result<Self, SessionError> {
        let state = store.load()?;
        let puzzle = catalog
            .get(state.game)
            .ok_or(SessionError::UnknownGame(state.game))?;
        let mut game = Self::new(puzzle, store);
        game.sync()?;
        Ok(game)
    }
}

impl<'p, S> Game<'p, S> {
    #[must_use]
    pub const fn puzzle(&self) -> &'p Puzzle {
        self.puzzle
    }

    #[must_use]
    pub const fn levels(&self) -> &Levels {
        &self.levels
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: SessionStore> Game<'_, S> {
    /// Current shared record
    ///
    /// # Errors
    ///
    /// Returns any error from the store.
    pub fn state(&self) -> Result<GameState, SessionError> {
        self.store.load()
    }

    /// # Errors
    ///
    /// Returns any error from the store.
    pub fn phase(&self) -> Result<Phase, SessionError> {
        Ok(Phase::of(Some(&self.store.load()?)))
    }

    /// # Errors
    ///
    /// Returns any error from the store.
    pub fn tally(&self) -> Result<Tally, SessionError> {
        let state = self.store.load()?;
        Ok(Tally::with_levels(&self.levels, self.puzzle.high(), &state.found))
    }

    /// Re-read the record, marking it over if the score has reached `high`
    ///
    /// Covers records whose writer stopped between `append` and `set_over`,
    /// and puzzles with nothing to find.
    ///
    /// # Errors
    ///
    /// Returns any error from the store.
    pub fn sync(&mut self) -> Result<GameState, SessionError> {
        let mut state = self.store.load()?;
        if !state.over
            && Tally::with_levels(&self.levels, self.puzzle.high(), &state.found).complete
        {
            self.store.set_over()?;
            state.mark_over();
            tracing::info!(game = state.game, "record already complete, marking over");
        }
        Ok(state)
    }

    /// Validate a guess and record it if accepted
    ///
    /// Reaching the puzzle's maximum score marks the session over.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Over` if the session has already finished, or
    /// any error from the store.
    pub fn submit(&mut self, candidate: &str) -> Result<Submission, SessionError> {
        let mut state = self.sync()?;
        if state.over {
            return Err(SessionError::Over);
        }

        let verdict = validate(Some(self.puzzle), &state.found, candidate);
        let mut points = 0;
        let mut completed = false;

        if verdict.is_accepted() {
            self.store.append(candidate)?;
            state.append(candidate);
            points = score_word(candidate);
            tracing::debug!(word = candidate, points, "accepted guess");
        }

        let tally = Tally::with_levels(&self.levels, self.puzzle.high(), &state.found);
        if verdict.is_accepted() && tally.complete {
            self.store.set_over()?;
            completed = true;
            tracing::info!(score = tally.score, "puzzle fully solved");
        }

        Ok(Submission {
            word: candidate.to_string(),
            verdict,
            points,
            pangram: verdict.is_accepted() && is_pangram(candidate),
            tally,
            completed,
        })
    }

    /// End the session for everyone
    ///
    /// # Errors
    ///
    /// Returns any error from the store.
    pub fn forfeit(&mut self) -> Result<(), SessionError> {
        tracing::info!(game = self.puzzle.edge(), "session forfeited");
        self.store.set_over()
    }

    /// Each answer paired with whether it was found, in catalog order
    ///
    /// # Errors
    ///
    /// Returns any error from the store.
    pub fn answer_sheet(&self) -> Result<Vec<(String, bool)>, SessionError> {
        let state = self.store.load()?;
        Ok(self
            .puzzle
            .answers()
            .iter()
            .map(|answer| (answer.clone(), state.found.contains(answer)))
            .collect())
    }
}
