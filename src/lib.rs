//! Spelltogether
//!
//! A cooperative spelling-bee: players share one hive of seven letters and
//! pool the words they find toward a common score.
//!
//! # Quick Start
//!
//! ```rust
//! use spelltogether::core::{Puzzle, Verdict, get_levels, score_game, validate};
//!
//! let puzzle = Puzzle::new('a', "lepign", ["leaping", "plain", "pale"], 20).unwrap();
//! let found = vec!["plain".to_string()];
//!
//! assert_eq!(validate(Some(&puzzle), &found, "pale"), Verdict::Accepted);
//! assert_eq!(validate(Some(&puzzle), &found, "plain"), Verdict::AlreadyFound);
//! assert_eq!(score_game(&found), 5);
//! assert_eq!(get_levels(&puzzle).values()[8], 12);
//! ```

// Core domain types
pub mod core;

// Puzzle catalogs
pub mod catalog;

// Shared game records
pub mod session;

// What other players are typing
pub mod presence;

// Runtime settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
