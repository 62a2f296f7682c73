//! Shared play sessions
//!
//! A session is a small replicated record (`GameState`) reached through a
//! `SessionStore`. Sessions on disk live as `<root>/sessions/<id>.json`, and
//! the ids this player has opened are kept in `<root>/seen.json`.

mod game;
mod id;
mod seen;
mod state;
mod store;

pub use game::{Game, Submission};
pub use id::{SESSION_ID_LEN, SessionId, SessionIdError};
pub use seen::SeenList;
pub use state::{GameState, Phase};
pub use store::{FileStore, MemoryStore, SessionStore};

use crate::catalog::Catalog;
use rand::Rng;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for session storage
#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    Parse(serde_json::Error),
    NotFound(PathBuf),
    UnknownGame(usize),
    Over,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Session storage failed: {err}"),
            Self::Parse(err) => write!(f, "Session record is malformed: {err}"),
            Self::NotFound(path) => write!(f, "No session at {}", path.display()),
            Self::UnknownGame(index) => write!(f, "Session refers to unknown puzzle #{index}"),
            Self::Over => write!(f, "This game is already over"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Directory holding session files and the seen list
#[derive(Debug, Clone)]
pub struct Sessions {
    root: PathBuf,
}

impl Sessions {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_for(&self, id: &SessionId) -> PathBuf {
        self.root.join("sessions").join(format!("{id}.json"))
    }

    /// Start a session on a random puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if the session file cannot be written.
    pub fn create<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<(SessionId, FileStore), SessionError> {
        let id = SessionId::generate(rng);
        let state = GameState::random(catalog, rng);
        let store = FileStore::create(self.path_for(&id), &state)?;
        tracing::info!(session = %id, game = state.game, "started new session");
        Ok((id, store))
    }

    /// Join an existing session
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` if no such session exists here.
    pub fn open(&self, id: &SessionId) -> Result<FileStore, SessionError> {
        FileStore::open(self.path_for(id))
    }

    /// # Errors
    ///
    /// Returns an error if the seen list exists but cannot be read.
    pub fn seen(&self) -> Result<SeenList, SessionError> {
        SeenList::load(self.root.join("seen.json"))
    }
}
