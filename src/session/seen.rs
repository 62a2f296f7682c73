//! Locally visited sessions, most recent first

use super::SessionError;
use super::id::SessionId;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent list of sessions this player has opened
#[derive(Debug, Clone)]
pub struct SeenList {
    path: PathBuf,
    ids: Vec<SessionId>,
}

impl SeenList {
    /// Load the list, treating a missing file as empty
    ///
    /// Entries that are not valid session ids are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load<P: Into<PathBuf>>(path: P) -> Result<Self, SessionError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self {
                path,
                ids: Vec::new(),
            });
        }

        let content = fs::read_to_string(&path)?;
        let raw: Vec<String> = serde_json::from_str(&content)?;
        let mut list = Self {
            path,
            ids: Vec::with_capacity(raw.len()),
        };
        for entry in raw {
            match SessionId::parse(&entry) {
                Ok(id) if !list.ids.contains(&id) => list.ids.push(id),
                Ok(_) => {}
                Err(err) => tracing::warn!(entry = %entry, "dropping seen entry: {err}"),
            }
        }
        Ok(list)
    }

    /// Move `id` to the front and save
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written.
    pub fn record(&mut self, id: &SessionId) -> Result<(), SessionError> {
        self.ids.retain(|seen| seen != id);
        self.ids.insert(0, id.clone());
        self.save()
    }

    fn save(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw: Vec<&str> = self.ids.iter().map(SessionId::as_str).collect();
        fs::write(&self.path, serde_json::to_string(&raw)?)?;
        Ok(())
    }

    #[must_use]
    pub fn ids(&self) -> &[SessionId] {
        &self.ids
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> SessionId {
        SessionId::parse(s).unwrap()
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let list = SeenList::load(dir.path().join("seen.json")).unwrap();
        assert!(list.ids().is_empty());
    }

    #[test]
    fn record_moves_to_front_without_repeats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen.json");

        let mut list = SeenList::load(&path).unwrap();
        list.record(&id("aaaaaaaaaa")).unwrap();
        list.record(&id("bbbbbbbbbb")).unwrap();
        list.record(&id("aaaaaaaaaa")).unwrap();

        assert_eq!(list.ids(), &[id("aaaaaaaaaa"), id("bbbbbbbbbb")]);

        let reloaded = SeenList::load(&path).unwrap();
        assert_eq!(reloaded.ids(), list.ids());
    }

    #[test]
    fn load_drops_empty_invalid_and_repeated_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen.json");
        fs::write(&path, r#"["", "aaaaaaaaaa", "bad id", "aaaaaaaaaa", "cccccccccc"]"#).unwrap();

        let list = SeenList::load(&path).unwrap();
        assert_eq!(list.ids(), &[id("aaaaaaaaaa"), id("cccccccccc")]);
    }
}
