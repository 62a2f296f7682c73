//! TUI rendering with ratatui
//!
//! The hive, the level gauge, everyone's guesses and the found words.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Puzzle, level_percent};
use crate::output::formatters::hive_banner;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Left panel
            Constraint::Percentage(45), // Right panel
        ])
        .split(chunks[1]);

    if app.input_mode == InputMode::GameOver {
        render_answer_sheet(f, app, main_chunks[0]);
    } else {
        render_main_panel(f, app, main_chunks[0]);
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let title = format!(
        "🐝 SPELLTOGETHER  {}  session {}",
        hive_banner(app.game.puzzle()),
        app.session
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hive
            Constraint::Min(4),    // Guessers
        ])
        .split(area);

    render_hive(f, app, chunks[0]);
    render_guessers(f, app, chunks[1]);
}

/// Style for a letter: the centre is highlighted, letters typed by anyone
/// flash
fn letter_style<S>(app: &App<'_, S>, letter: char) -> Style {
    let typed = app.board.is_remote_letter(letter);
    let base = if letter == app.game.puzzle().centre() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    if typed {
        base.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        base.add_modifier(Modifier::BOLD)
    }
}

fn hive_cell<S>(app: &App<'_, S>, letter: char) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        letter_style(app, letter),
    )
}

fn render_hive<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let edge = &app.edge;
    let centre = app.game.puzzle().centre();
    let row = |letters: &[char]| {
        let mut spans = Vec::new();
        for (i, &letter) in letters.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(hive_cell(app, letter));
        }
        Line::from(spans)
    };

    let content = vec![
        row(&edge[..2]),
        Line::from(vec![
            hive_cell(app, edge[2]),
            Span::raw("  "),
            hive_cell(app, centre),
            Span::raw("  "),
            hive_cell(app, edge[3]),
        ]),
        row(&edge[4..]),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Hive ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

/// Colour a guess letter by letter: red outside the hive
fn guess_spans(puzzle: &Puzzle, guess: &str) -> Vec<Span<'static>> {
    let letters = puzzle.letters();
    guess
        .chars()
        .map(|c| {
            let style = if c == puzzle.centre() {
                Style::default().fg(Color::Yellow)
            } else if c.is_ascii_lowercase() && letters.contains(c as u8) {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Red)
            };
            Span::styled(c.to_ascii_uppercase().to_string(), style)
        })
        .collect()
}

fn render_guessers<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let items: Vec<ListItem> = app
        .board
        .players()
        .map(|player| {
            let mut spans = vec![Span::styled(
                format!("{:<12} ", player.name),
                Style::default().fg(Color::Cyan),
            )];
            spans.extend(guess_spans(app.game.puzzle(), &player.guess));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Guessing ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_answer_sheet<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let found = &app.state.found;
    let mut lines = vec![
        Line::from(format!(
            "the highest possible score was {}. you got {}.",
            app.tally.high, app.tally.score
        )),
        Line::from(""),
    ];
    lines.extend(app.game.puzzle().answers().iter().map(|answer| {
        if found.contains(answer) {
            Line::from(Span::styled(
                format!("✓ {answer}"),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("· {answer}"),
                Style::default().fg(Color::DarkGray),
            ))
        }
    }));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Game Over ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Level gauge
            Constraint::Percentage(60), // Found words
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_level(f, app, chunks[0]);
    render_found(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_level<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let levels = app.game.levels();
    // Cast is safe: level_percent is within [0, 100]
    let percent = level_percent(app.tally.level) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Level ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent.min(100))
        .label(format!(
            "{} | {} points",
            levels.name_of(app.tally.score),
            app.tally.score
        ));

    f.render_widget(gauge, area);
}

fn render_found<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let found = &app.state.found;
    let words: Vec<&str> = found.iter().rev().map(String::as_str).collect();
    let paragraph = Paragraph::new(words.join(" "))
        .block(
            Block::default()
                .title(format!(" Found ({}) ", found.len()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::GameOver => (" Game over | Press 'q' to quit ", Color::Green),
        InputMode::ConfirmForfeit => (" Really give up? (y/n) ", Color::Red),
        InputMode::Guessing => (" Your word | Enter to submit ", Color::Yellow),
    };

    let input = Paragraph::new(Line::from(guess_spans(app.game.puzzle(), &app.guess)))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.name)).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let words = Paragraph::new(format!(
        "Words: {}/{}",
        app.state.found.len(),
        app.game.puzzle().answers().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit"
    } else {
        "Esc: Quit | Tab: Shuffle | Ctrl-G: Give up"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
