//! Catalog audit - re-check every puzzle's invariants
//!
//! Runs in parallel across the catalog and reports any puzzle whose data
//! would break scoring or leveling.

use crate::catalog::Catalog;
use crate::core::{Levels, Puzzle, get_levels, score_game};
use crate::output::formatters::hive_banner;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fmt;
use std::time::{Duration, Instant};

/// A problem found in one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditIssue {
    NoAnswers,
    HighMismatch { declared: u32, computed: u32 },
    NoPangram,
    BadLevels(Levels),
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "no answers"),
            Self::HighMismatch { declared, computed } => {
                write!(f, "high is {declared} but answers total {computed}")
            }
            Self::NoPangram => write!(f, "no pangram among the answers"),
            Self::BadLevels(levels) => write!(f, "levels not strictly increasing: {levels:?}"),
        }
    }
}

/// Audit outcome for one puzzle
#[derive(Debug, Clone)]
pub struct PuzzleAudit {
    pub index: usize,
    pub banner: String,
    pub answers: usize,
    pub pangrams: usize,
    pub high: u32,
    pub issues: Vec<AuditIssue>,
}

/// Audit outcome for a whole catalog
#[derive(Debug)]
pub struct AuditReport {
    pub puzzles: Vec<PuzzleAudit>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn failures(&self) -> usize {
        self.puzzles.iter().filter(|p| !p.issues.is_empty()).count()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures() == 0
    }
}

/// Check a single puzzle
#[must_use]
pub fn audit_puzzle(index: usize, puzzle: &Puzzle) -> PuzzleAudit {
    let mut issues = Vec::new();

    if puzzle.answers().is_empty() {
        issues.push(AuditIssue::NoAnswers);
    }

    let computed = score_game(puzzle.answers());
    if computed != puzzle.high() {
        issues.push(AuditIssue::HighMismatch {
            declared: puzzle.high(),
            computed,
        });
    }

    let pangrams = puzzle.pangrams().count();
    if pangrams == 0 {
        issues.push(AuditIssue::NoPangram);
    }

    let levels = get_levels(puzzle);
    let values = levels.values();
    if values[0] != 0 || !values.windows(2).all(|w| w[0] < w[1]) {
        issues.push(AuditIssue::BadLevels(levels));
    }

    PuzzleAudit {
        index,
        banner: hive_banner(puzzle),
        answers: puzzle.answers().len(),
        pangrams,
        high: puzzle.high(),
        issues,
    }
}

/// Audit every puzzle in the catalog
///
/// Shows a progress bar unless `quiet` is set.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_audit(catalog: &Catalog, quiet: bool) -> AuditReport {
    let start = Instant::now();

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(catalog.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("auditing puzzles");

    let puzzles: Vec<PuzzleAudit> = catalog
        .puzzles()
        .par_iter()
        .enumerate()
        .map(|(index, puzzle)| {
            let audit = audit_puzzle(index, puzzle);
            pb.inc(1);
            audit
        })
        .collect();

    pb.finish_with_message("done");

    let report = AuditReport {
        puzzles,
        duration: start.elapsed(),
    };
    tracing::info!(
        puzzles = report.puzzles.len(),
        failures = report.failures(),
        "catalog audit finished"
    );
    report
}
