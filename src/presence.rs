//! Ephemeral presence messages
//!
//! Players broadcast what they are typing; nothing here is persisted. The
//! board folds messages into one entry per player name. Local typing is
//! applied directly; other players' messages arrive over whatever channel
//! carries the session's broadcasts and are handed to `App::receive`. This
//! crate ships no such channel, so a board with no feed shows only the
//! local player.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A broadcast from one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guess: Option<String>,
    pub name: String,
}

impl PresenceMessage {
    /// Just announce the player
    #[must_use]
    pub fn hello(name: &str) -> Self {
        Self {
            letter: None,
            guess: None,
            name: name.to_string(),
        }
    }

    /// A single letter was typed
    #[must_use]
    pub fn letter(name: &str, letter: char) -> Self {
        Self {
            letter: Some(letter.to_string()),
            guess: None,
            name: name.to_string(),
        }
    }

    /// The player's in-progress guess changed
    #[must_use]
    pub fn guess(name: &str, guess: &str) -> Self {
        Self {
            letter: None,
            guess: Some(guess.to_string()),
            name: name.to_string(),
        }
    }
}

/// What is known about one player right now
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guesser {
    pub name: String,
    /// Last letter typed, empty once it has faded
    pub letter: String,
    pub guess: String,
}

/// Latest presence state for every player seen
#[derive(Debug, Clone, Default)]
pub struct PresenceBoard {
    players: FxHashMap<String, Guesser>,
    order: Vec<String>,
}

impl PresenceBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, name: &str) -> &mut Guesser {
        if !self.players.contains_key(name) {
            self.order.push(name.to_string());
        }
        self.players
            .entry(name.to_string())
            .or_insert_with(|| Guesser {
                name: name.to_string(),
                ..Guesser::default()
            })
    }

    /// Fold a message into the board
    ///
    /// A letter keeps the player's guess, a guess keeps their letter, and a
    /// bare message resets both.
    pub fn apply(&mut self, message: &PresenceMessage) {
        let player = self.entry(&message.name);
        if let Some(letter) = &message.letter {
            player.letter.clone_from(letter);
        } else if let Some(guess) = &message.guess {
            player.guess.clone_from(guess);
        } else {
            player.letter.clear();
            player.guess.clear();
        }
    }

    /// Fade a player's last letter
    pub fn clear_letter(&mut self, name: &str) {
        if let Some(player) = self.players.get_mut(name) {
            player.letter.clear();
        }
    }

    /// Players in order of first appearance
    pub fn players(&self) -> impl Iterator<Item = &Guesser> {
        self.order.iter().filter_map(|name| self.players.get(name))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Guesser> {
        self.players.get(name)
    }

    /// Names of players with a letter still showing
    #[must_use]
    pub fn typing(&self) -> Vec<&str> {
        self.players()
            .filter(|player| !player.letter.is_empty())
            .map(|player| player.name.as_str())
            .collect()
    }

    /// Whether any player's current letter is `letter`
    #[must_use]
    pub fn is_remote_letter(&self, letter: char) -> bool {
        let mut buf = [0u8; 4];
        let letter: &str = letter.encode_utf8(&mut buf);
        self.players().any(|player| player.letter == letter)
    }
}
