//! Display functions for command results

use super::formatters::{acceptance_message, create_progress_bar, verdict_message};
use crate::commands::{AuditReport, CheckResult, LevelRow, SessionSummary};
use crate::core::{Levels, Puzzle, Tally, level_percent};
use crate::session::{Game, SessionError, SessionStore, Submission};
use colored::Colorize;

/// Print the letters and the player's progress
pub fn print_board(puzzle: &Puzzle, edge: &[char], tally: &Tally, levels: &Levels) {
    let centre = puzzle.centre().to_ascii_uppercase().to_string();
    let (left, right) = edge.split_at(edge.len() / 2);
    let letters = |side: &[char]| {
        side.iter()
            .map(|c| c.to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("────────────────────────────────────────────────────────────");
    println!(
        "   {}  [{}]  {}",
        letters(left).bright_white().bold(),
        centre.bright_yellow().bold(),
        letters(right).bright_white().bold()
    );
    print_progress(tally, levels);
    println!("────────────────────────────────────────────────────────────");
}

/// Print the level name and a bar positioned at the current tier
pub fn print_progress(tally: &Tally, levels: &Levels) {
    let percent = level_percent(tally.level);
    let bar = create_progress_bar(percent, 100.0, 32);
    print!(
        "   {} [{}] {}",
        levels.name_of(tally.score).bright_cyan().bold(),
        bar.green(),
        tally.score.to_string().bright_yellow().bold()
    );
    if tally.level + 1 == levels.values().len() {
        print!(" (max: {})", tally.high);
    }
    println!();
}

/// Print the outcome of one guess
pub fn print_submission(submission: &Submission) {
    if let Some((icon, message)) = verdict_message(submission.verdict) {
        println!("{icon} {}", message.red());
        return;
    }

    let (icon, message) =
        acceptance_message(&submission.word, submission.points, submission.pangram);
    if submission.pangram {
        println!("\n{}", "═".repeat(60).bright_cyan());
        println!("{icon} {}", message.bright_green().bold());
        println!("{}", "═".repeat(60).bright_cyan());
    } else {
        println!("{icon} {}", message.green());
    }

    if submission.completed {
        println!("\n{}", "═".repeat(70).bright_cyan());
        println!(
            "{}",
            "    🎉 🎊 ✨  E V E R Y   W O R D   F O U N D !  ✨ 🎊 🎉    "
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(70).bright_cyan());
    }
}

/// Print the end-of-game summary with every answer
///
/// # Errors
///
/// Returns any error from the session store.
pub fn print_game_over<S: SessionStore>(game: &Game<'_, S>) -> Result<(), SessionError> {
    let tally = game.tally()?;
    let sheet = game.answer_sheet()?;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME OVER".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nthe highest possible score was {}. you got {}.\n",
        tally.high.to_string().bold(),
        tally.score.to_string().bright_yellow().bold()
    );

    for (answer, got) in sheet {
        if got {
            println!("  {} {}", "✓".green(), answer.bright_white().bold());
        } else {
            println!("  {} {}", "·".bright_black(), answer.bright_black());
        }
    }
    println!();
    Ok(())
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} in puzzle #{}: {}",
        result.word.to_uppercase().bright_yellow().bold(),
        result.game,
        result.verdict
    );
    match verdict_message(result.verdict) {
        Some((icon, message)) => println!("  {icon} {message}"),
        None => {
            let (icon, message) = acceptance_message(&result.word, result.points, result.pangram);
            println!("  {icon} {}", message.green());
        }
    }
}

/// Print a puzzle's level table
pub fn print_level_table(banner: &str, high: u32, rows: &[LevelRow]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} (max {high})",
        "LEVELS:".bright_cyan().bold(),
        banner.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for row in rows {
        let bar = create_progress_bar(row.percent, 100.0, 16);
        println!(
            "   {:>4}  [{}] {}",
            row.threshold,
            bar.green(),
            row.name.bright_white()
        );
    }
}

/// Print the result of a catalog audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for audit in &report.puzzles {
        let status = if audit.issues.is_empty() {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "   {status} #{:<4} {}  {:>3} answers  {} pangrams  max {}",
            audit.index,
            audit.banner.bright_white(),
            audit.answers,
            audit.pangrams,
            audit.high
        );
        for issue in &audit.issues {
            println!("       {}", issue.to_string().red());
        }
    }

    println!(
        "\n📊 {} puzzles, {} with problems ({:.2}s)",
        report.puzzles.len(),
        report.failures(),
        report.duration.as_secs_f64()
    );
}

/// Print visited sessions
pub fn print_sessions(summaries: &[SessionSummary]) {
    println!("\n{}", "games".bright_cyan().bold());
    if summaries.is_empty() {
        println!("  no games yet - start one with `spelltogether play`");
        return;
    }

    for summary in summaries {
        let done = if summary.over { " ✅" } else { "" };
        let bar = create_progress_bar(level_percent(summary.tally.level), 100.0, 16);
        println!(
            "  {}  {}{}  {} [{}] {}",
            summary.id.as_str().bright_black(),
            summary.banner.bright_white().bold(),
            done,
            summary.levels.name_of(summary.tally.score).bright_cyan(),
            bar.green(),
            summary.tally.score
        );
    }
}
