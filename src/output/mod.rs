//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_audit_report, print_board, print_check_result, print_game_over, print_level_table,
    print_progress, print_sessions, print_submission,
};
