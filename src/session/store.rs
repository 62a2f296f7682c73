//! Session stores
//!
//! `SessionStore` is the seam between the engine's caller and whatever keeps
//! the shared document. Implementations must keep `found` free of repeats and
//! never clear `over`.

use super::SessionError;
use super::state::GameState;
use std::fs;
use std::path::{Path, PathBuf};

/// Access to one session's shared record
pub trait SessionStore {
    /// Current state of the session
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read.
    fn load(&self) -> Result<GameState, SessionError>;

    /// Add a found word; already-present words are left as they are
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be updated.
    fn append(&mut self, word: &str) -> Result<(), SessionError>;

    /// Mark the session finished
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be updated.
    fn set_over(&mut self) -> Result<(), SessionError>;
}

/// Store that keeps the record in memory
#[derive(Debug, Clone)]
pub struct MemoryStore {
    state: GameState,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(state: GameState) -> Self {
        Self { state }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<GameState, SessionError> {
        Ok(self.state.clone())
    }

    fn append(&mut self, word: &str) -> Result<(), SessionError> {
        self.state.append(word);
        Ok(())
    }

    fn set_over(&mut self) -> Result<(), SessionError> {
        self.state.mark_over();
        Ok(())
    }
}

/// Store backed by a JSON file
///
/// Every mutation re-reads the file first, so several processes sharing the
/// file see each other's words.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Write a new session file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn create<P: Into<PathBuf>>(path: P, state: &GameState) -> Result<Self, SessionError> {
        let store = Self { path: path.into() };
        if let Some(parent) = store.path.parent() {
            fs::create_dir_all(parent)?;
        }
        store.write(state)?;
        tracing::debug!(path = %store.path.display(), game = state.game, "created session file");
        Ok(store)
    }

    /// Open an existing session file
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFound` if there is no file at `path`.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self, SessionError> {
        let path = path.into();
        if !path.is_file() {
            return Err(SessionError::NotFound(path));
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, state: &GameState) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update(&self, change: impl FnOnce(&mut GameState) -> bool) -> Result<(), SessionError> {
        let mut state = self.load()?;
        if change(&mut state) {
            self.write(&state)?;
        }
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<GameState, SessionError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn append(&mut self, word: &str) -> Result<(), SessionError> {
        self.update(|state| state.append(word))
    }

    fn set_over(&mut self) -> Result<(), SessionError> {
        self.update(|state| {
            if state.over {
                return false;
            }
            state.mark_over();
            true
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_appends_without_repeats() {
        let mut store = MemoryStore::new(GameState::new(1));
        store.append("plain").unwrap();
        store.append("plain").unwrap();
        store.append("pale").unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.found, vec!["plain", "pale"]);
        assert_eq!(state.game, 1);
    }

    #[test]
    fn memory_store_over_is_sticky() {
        let mut store = MemoryStore::new(GameState::new(0));
        store.set_over().unwrap();
        store.set_over().unwrap();
        assert!(store.load().unwrap().over);
    }

    #[test]
    fn file_store_persists_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions").join("abc.json");

        let mut store = FileStore::create(&path, &GameState::new(2)).unwrap();
        store.append("plain").unwrap();
        store.append("plain").unwrap();
        store.set_over().unwrap();

        let reopened = FileStore::open(&path).unwrap();
        let state = reopened.load().unwrap();
        assert_eq!(state.game, 2);
        assert_eq!(state.found, vec!["plain"]);
        assert!(state.over);
    }

    #[test]
    fn file_store_sees_other_writers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.json");

        let mut alice = FileStore::create(&path, &GameState::new(0)).unwrap();
        let mut bob = FileStore::open(&path).unwrap();

        alice.append("pale").unwrap();
        bob.append("plain").unwrap();
        bob.append("pale").unwrap();

        assert_eq!(alice.load().unwrap().found, vec!["pale", "plain"]);
    }

    #[test]
    fn open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileStore::open(dir.path().join("nope.json"));
        assert!(matches!(result, Err(SessionError::NotFound(_))));
    }

    #[test]
    fn corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{oops").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(matches!(store.load(), Err(SessionError::Parse(_))));
    }
}
