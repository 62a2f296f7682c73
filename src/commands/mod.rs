//! Command implementations

pub mod audit;
pub mod check;
pub mod games;
pub mod levels;
pub mod play;

pub use audit::{AuditIssue, AuditReport, PuzzleAudit, run_audit};
pub use check::{CheckResult, check_word};
pub use games::{SessionSummary, list_sessions};
pub use levels::{LevelRow, level_table};
pub use play::{
    COMMAND_PREFIX, LineInput, MAX_GUESS_LEN, normalize_guess, parse_line, run_simple,
};
