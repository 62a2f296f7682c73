//! TUI application state and logic

use crate::commands::MAX_GUESS_LEN;
use crate::core::Tally;
use crate::output::formatters::{acceptance_message, verdict_message};
use crate::presence::{PresenceBoard, PresenceMessage};
use crate::session::{Game, GameState, SessionError, SessionId, SessionStore};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::SliceRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a typed letter stays highlighted
const LETTER_FADE: Duration = Duration::from_millis(200);

/// How often the shared record is re-read while idle
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a, S> {
    pub game: Game<'a, S>,
    pub session: SessionId,
    pub name: String,
    pub edge: Vec<char>,
    pub guess: String,
    pub state: GameState,
    pub tally: Tally,
    pub board: PresenceBoard,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    letter_typed_at: Option<Instant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    ConfirmForfeit,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: SessionStore> App<'a, S> {
    /// # Errors
    ///
    /// Returns an error if the session cannot be read.
    pub fn new(
        mut game: Game<'a, S>,
        session: SessionId,
        name: String,
    ) -> Result<Self, SessionError> {
        let state = game.sync()?;
        let tally = game.tally()?;
        let edge = game.puzzle().edge().chars().collect();

        let mut board = PresenceBoard::new();
        board.apply(&PresenceMessage::hello(&name));

        let input_mode = if state.over {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        };

        Ok(Self {
            game,
            session,
            name,
            edge,
            guess: String::new(),
            state,
            tally,
            board,
            messages: vec![Message {
                text: "Find words of 4+ letters that use the centre letter.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode,
            should_quit: false,
            letter_typed_at: None,
        })
    }

    /// Re-read the shared record, picking up other players' words
    ///
    /// A record that has reached the maximum score is marked over here too.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or updated.
    pub fn refresh(&mut self) -> Result<(), SessionError> {
        self.state = self.game.sync()?;
        self.tally = self.game.tally()?;
        if self.state.over && self.input_mode != InputMode::GameOver {
            self.input_mode = InputMode::GameOver;
            self.add_message("The game is over.", MessageStyle::Info);
        }
        Ok(())
    }

    /// Fold in a presence message from another player
    ///
    /// Echoes of the local player's own messages are ignored; the board
    /// already holds them.
    pub fn receive(&mut self, message: &PresenceMessage) {
        if message.name == self.name {
            return;
        }
        self.board.apply(message);
    }

    /// Type one letter into the guess
    pub fn insert(&mut self, letter: char) {
        if !letter.is_ascii_lowercase() {
            return;
        }
        self.guess.push(letter);
        self.board.apply(&PresenceMessage::letter(&self.name, letter));
        self.letter_typed_at = Some(Instant::now());

        if self.guess.len() > MAX_GUESS_LEN {
            self.add_message("too big", MessageStyle::Error);
            self.guess.clear();
        }
        self.board.apply(&PresenceMessage::guess(&self.name, &self.guess));
    }

    pub fn backspace(&mut self) {
        self.guess.pop();
        self.board.apply(&PresenceMessage::guess(&self.name, &self.guess));
    }

    pub fn shuffle(&mut self) {
        self.edge.shuffle(&mut rand::rng());
    }

    /// Fade the highlighted letter once it has been shown long enough
    pub fn tick(&mut self) {
        if self
            .letter_typed_at
            .is_some_and(|at| at.elapsed() >= LETTER_FADE)
        {
            self.board.clear_letter(&self.name);
            self.letter_typed_at = None;
        }
    }

    /// Submit the current guess
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        let guess = std::mem::take(&mut self.guess);
        self.board.apply(&PresenceMessage::guess(&self.name, ""));
        if guess.is_empty() {
            return Ok(());
        }

        match self.game.submit(&guess) {
            Ok(submission) => {
                if let Some((icon, message)) = verdict_message(submission.verdict) {
                    self.add_message(&format!("{icon} {message}"), MessageStyle::Error);
                } else {
                    let (icon, message) =
                        acceptance_message(&submission.word, submission.points, submission.pangram);
                    self.add_message(&format!("{icon} {message}"), MessageStyle::Success);
                }
                if submission.completed {
                    self.add_message("🎉 Every word found! 🎉", MessageStyle::Success);
                }
            }
            Err(SessionError::Over) => {}
            Err(err) => return Err(err),
        }

        self.refresh()
    }

    /// End the game for everyone
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub fn forfeit(&mut self) -> Result<(), SessionError> {
        self.game.forfeit()?;
        self.refresh()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: SessionStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: SessionStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(POLL_INTERVAL)? {
            app.tick();
            app.refresh()?;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    _ => {}
                },
                InputMode::ConfirmForfeit => match key.code {
                    KeyCode::Char('y') => app.forfeit()?,
                    _ => {
                        app.input_mode = InputMode::Guessing;
                        app.add_message("Carry on!", MessageStyle::Info);
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if ctrl => app.should_quit = true,
                    KeyCode::Char('g') if ctrl => {
                        app.input_mode = InputMode::ConfirmForfeit;
                        app.add_message(
                            "Give up? This ends the game for everyone! (y/n)",
                            MessageStyle::Error,
                        );
                    }
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.shuffle(),
                    KeyCode::Enter => app.submit()?,
                    KeyCode::Backspace => app.backspace(),
                    KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                        app.insert(c.to_ascii_lowercase());
                    }
                    _ => {}
                },
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crate::session::MemoryStore;

    fn app(puzzle: &Puzzle) -> App<'_, MemoryStore> {
        let game = Game::new(puzzle, MemoryStore::new(GameState::new(0)));
        App::new(game, SessionId::parse("abcdefghij").unwrap(), "ana".into()).unwrap()
    }

    fn puzzle() -> Puzzle {
        Puzzle::new('a', "lepign", ["leaping", "plain", "pale"], 20).unwrap()
    }

    #[test]
    fn typing_updates_guess_and_presence() {
        let puzzle = puzzle();
        let mut app = app(&puzzle);

        for c in "pale".chars() {
            app.insert(c);
        }
        app.insert('1');

        assert_eq!(app.guess, "pale");
        assert_eq!(app.board.get("ana").unwrap().guess, "pale");
        assert_eq!(app.board.typing(), vec!["ana"]);
    }

    #[test]
    fn overlong_guess_is_discarded() {
        let puzzle = puzzle();
        let mut app = app(&puzzle);

        for _ in 0..=MAX_GUESS_LEN {
            app.insert('p');
        }
        assert!(app.guess.is_empty());
        assert_eq!(app.messages.last().unwrap().text, "too big");
    }

    #[test]
    fn submit_scores_and_clears() {
        let puzzle = puzzle();
        let mut app = app(&puzzle);

        for c in "plain".chars() {
            app.insert(c);
        }
        app.submit().unwrap();

        assert!(app.guess.is_empty());
        assert_eq!(app.tally.score, 5);
        assert_eq!(app.state.found, vec!["plain"]);
        assert!(app.messages.last().unwrap().text.contains("nice! 5 points"));
    }

    #[test]
    fn finishing_switches_to_game_over() {
        let puzzle = puzzle();
        let mut app = app(&puzzle);

        for word in ["pale", "plain", "leaping"] {
            for c in word.chars() {
                app.insert(c);
            }
            app.submit().unwrap();
        }

        assert!(app.state.over);
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn forfeit_switches_to_game_over() {
        let puzzle = puzzle();
        let mut app = app(&puzzle);
        app.forfeit().unwrap();
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn full_record_opens_as_game_over() {
        let puzzle = puzzle();
        let mut state = GameState::new(0);
        for word in ["pale", "plain", "leaping"] {
            state.append(word);
        }
        let game = Game::new(&puzzle, MemoryStore::new(state));
        let app = App::new(game, SessionId::parse("abcdefghij").unwrap(), "ana".into()).unwrap();

        assert!(app.state.over);
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn refresh_marks_empty_puzzle_over() {
        let puzzle = Puzzle::new('a', "lepign", Vec::<String>::new(), 0).unwrap();
        let mut app = app(&puzzle);
        assert_eq!(app.input_mode, InputMode::GameOver);

        app.refresh().unwrap();
        assert!(app.state.over);
    }

    #[test]
    fn remote_presence_shows_other_players() {
        let puzzle = puzzle();
        let mut app = app(&puzzle);

        app.receive(&PresenceMessage::hello("bo"));
        app.receive(&PresenceMessage::letter("bo", 'g'));
        app.receive(&PresenceMessage::guess("bo", "pag"));
        app.receive(&PresenceMessage::guess("ana", "ignored"));

        let names: Vec<&str> = app.board.players().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["ana", "bo"]);
        assert_eq!(app.board.get("bo").unwrap().guess, "pag");
        assert!(app.board.is_remote_letter('g'));
        assert_eq!(app.board.get("ana").unwrap().guess, "");
    }

    #[test]
    fn messages_are_capped() {
        let puzzle = puzzle();
        let mut app = app(&puzzle);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
