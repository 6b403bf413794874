//! TUI application state and logic

use crate::core::{Game, GuessOutcome, Letter, Word};
use crate::input::{self, Action};
use crate::wordlists::loader::pick_word;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    words: Vec<Word>,
    pub game: Game,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let game = Game::new(pick_word(&words, &mut rand::rng()));

        Self {
            words,
            game,
            messages: vec![
                Message {
                    text: "Welcome! Guess the word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Six wrong letters and the drawing is complete.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Apply a routed action to the game
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Guess(letter) => self.handle_guess(letter),
            Action::Restart => self.new_round(),
        }
    }

    fn handle_guess(&mut self, letter: Letter) {
        match self.game.guess(letter) {
            GuessOutcome::Correct => {
                self.add_message(&format!("'{letter}' is in the word!"), MessageStyle::Success);
                if self.game.is_winner() {
                    self.add_message(
                        &format!(
                            "You won! The word was '{}'. Press Enter for a new round.",
                            self.game.word().text()
                        ),
                        MessageStyle::Success,
                    );
                }
            }
            GuessOutcome::Incorrect => {
                self.add_message(
                    &format!(
                        "'{letter}' is not in the word ({} left)",
                        self.game.remaining_misses()
                    ),
                    MessageStyle::Error,
                );
                if self.game.is_loser() {
                    self.add_message(
                        &format!(
                            "Game over! The word was '{}'. Press Enter for a new round.",
                            self.game.word().text()
                        ),
                        MessageStyle::Error,
                    );
                }
            }
            GuessOutcome::AlreadyGuessed => {
                self.add_message(&format!("Already tried '{letter}'."), MessageStyle::Info);
            }
            GuessOutcome::RoundOver => {
                // Round is over; the keyboard is disabled, nothing to report
            }
        }
    }

    pub fn new_round(&mut self) {
        self.game.restart(pick_word(&self.words, &mut rand::rng()));
        self.messages.clear();
        self.add_message("New round started!", MessageStyle::Info);
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Every lowercase letter is a guess, so quitting is Esc or Ctrl-C
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ => {
                    if let Some(action) = input::route(&key) {
                        app.handle(action);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
