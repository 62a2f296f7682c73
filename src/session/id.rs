//! Session identifiers

use rand::Rng;
use rand::distr::Alphanumeric;
use std::fmt;

pub const SESSION_ID_LEN: usize = 10;

/// Name of a shared session, used as its file stem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

/// Error type for malformed session ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionIdError {
    InvalidLength { expected: usize, found: usize },
    InvalidCharacter { ch: char, index: usize },
}

impl fmt::Display for SessionIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "session id must be {expected} chars, got {found}")
            }
            Self::InvalidCharacter { ch, index } => {
                write!(f, "invalid character '{ch}' at position {index}")
            }
        }
    }
}

impl std::error::Error for SessionIdError {}

impl SessionId {
    /// Random alphanumeric id
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = rng
            .sample_iter(Alphanumeric)
            .take(SESSION_ID_LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    /// Parse an id typed by a player
    ///
    /// # Errors
    ///
    /// Returns `SessionIdError` for a wrong length or a non-alphanumeric character.
    pub fn parse(value: &str) -> Result<Self, SessionIdError> {
        let value = value.trim();
        let found = value.chars().count();
        if found != SESSION_ID_LEN {
            return Err(SessionIdError::InvalidLength {
                expected: SESSION_ID_LEN,
                found,
            });
        }
        if let Some((index, ch)) = value
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_alphanumeric())
        {
            return Err(SessionIdError::InvalidCharacter { ch, index });
        }
        Ok(Self(value.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for SessionId {
    type Err = SessionIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}
