//! TUI application state and logic

use crate::commands::validate_guess;
use crate::game::{Game, GameError, GameStatus, Statistics};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub dictionary: Dictionary,
    pub attempt_limit: u32,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and draw the first secret word
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the dictionary is empty or the limit is 0.
    pub fn new(mut dictionary: Dictionary, attempt_limit: u32) -> Result<Self, GameError> {
        let game = Game::from_supplier(&mut dictionary, attempt_limit)?;
        let length = game.word_length();

        let mut app = Self {
            dictionary,
            attempt_limit,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            &format!("Find the {length}-letter word in {attempt_limit} attempts."),
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn new_game(&mut self) {
        match Game::from_supplier(&mut self.dictionary, self.attempt_limit) {
            Ok(game) => {
                self.game = game;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    &format!(
                        "New game! Find the {}-letter word.",
                        self.game.word_length()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Validate the typed guess and submit it
    pub fn submit_input(&mut self) {
        let guess = match validate_guess(&self.input_buffer, self.game.word_length()) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.game.submit_guess(&guess) {
            Ok(turn) => {
                self.input_buffer.clear();
                match turn.status {
                    GameStatus::Won => {
                        self.finish_game();
                        let attempts = self.game.history().len();
                        let celebration = match attempts {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥".to_string(),
                            n => format!("🎉 YOU WON in {n} guesses! 🎉"),
                        };
                        self.add_message(&celebration, MessageStyle::Success);
                        self.add_message(
                            "Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::Lost => {
                        self.finish_game();
                        let secret = self
                            .game
                            .revealed_secret()
                            .map(ToString::to_string)
                            .unwrap_or_default();
                        self.add_message(
                            &format!("GAME OVER. The word was {secret}."),
                            MessageStyle::Error,
                        );
                        self.add_message(
                            "Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Info,
                        );
                    }
                    GameStatus::InProgress => {
                        let left = turn.attempts_left;
                        self.add_message(
                            &format!("{left} attempt{} left", if left == 1 { "" } else { "s" }),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        self.stats.record(&self.game);
        self.input_mode = InputMode::GameOver;
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if c.is_ascii_alphabetic() && self.input_buffer.len() < self.game.word_length()
                    {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
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
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Draw and handle events until the player quits
fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use ratatui::backend::TestBackend;

    fn app(secret: &str, attempts: u32) -> App {
        App::new(Dictionary::new(vec![Word::new(secret).unwrap()]), attempts).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_is_uppercased_and_capped() {
        let mut app = app("BEER", 5);
        for c in "ab1lexyz".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "ABLE");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "ABL");
    }

    #[test]
    fn short_guess_is_rejected() {
        let mut app = app("BEER", 5);
        type_word(&mut app, "abl");

        assert!(app.game.history().is_empty());
        assert_eq!(app.input_buffer, "ABL");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("INVALID WORD LENGTH"));
    }

    #[test]
    fn wrong_guess_then_win() {
        let mut app = app("BEER", 5);
        type_word(&mut app, "able");
        assert_eq!(app.game.attempts_left(), 4);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Guessing);

        type_word(&mut app, "beer");
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn loss_reveals_secret() {
        let mut app = app("BEER", 1);
        type_word(&mut app, "able");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("The word was BEER")));
    }

    #[test]
    fn new_game_after_game_over() {
        let mut app = app("BEER", 1);
        type_word(&mut app, "beer");
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.game.history().is_empty());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn q_types_while_guessing_and_quits_when_over() {
        let mut app = app("QUIET", 2);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "Q");

        type_word(&mut app, "uiet");
        assert_eq!(app.input_mode, InputMode::GameOver);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app("BEER", 5);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app("BEER", 5);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "message 5");
    }

    #[test]
    fn empty_dictionary_fails() {
        let result = App::new(Dictionary::new(Vec::new()), 5);
        assert!(matches!(result, Err(GameError::EmptyDictionary)));
    }

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 30)).unwrap()
    }

    #[test]
    fn event_loop_stops_on_quit_key() {
        let mut keys = vec![
            Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Event::Key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE)),
        ];
        let result = run_app(&mut test_terminal(), app("BEER", 5), || {
            Ok(keys.pop().expect("loop read past the quit key"))
        });
        assert!(result.is_ok());
    }

    #[test]
    fn event_loop_propagates_read_errors() {
        let result = run_app(&mut test_terminal(), app("BEER", 5), || {
            Err(io::Error::other("input closed"))
        });
        let err = result.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }
}
