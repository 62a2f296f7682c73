//! Embedded puzzle catalog
//!
//! Puzzles compiled into the binary at build time.

/// A catalog entry as written by the build script
#[derive(Debug, Clone, Copy)]
pub struct RawPuzzle {
    pub centre: &'static str,
    pub edge: &'static str,
    pub high: u32,
    pub answers: &'static [&'static str],
}

// Include generated catalog from build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
