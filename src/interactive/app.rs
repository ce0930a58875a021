//! TUI application state and logic

use crate::core::{MatchPolicy, Word};
use crate::game::{
    self, GameSession, GameState, InputKey, KeyOutcome, MAX_GUESSES, Puzzle, Submission,
};
use crate::wordlists::Dictionary;
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
pub struct App<'a> {
    pub game: GameSession<'a>,
    pub targets: &'a [Word],
    pub dictionary: &'a Dictionary,
    pub policy: MatchPolicy,
    pub puzzle: Puzzle,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

/// Which key map is active
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Letters, Backspace and Enter reach the session
    Playing,
    /// The session is frozen; only 'n' and quit keys do anything
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        target: Word,
        puzzle: Puzzle,
        targets: &'a [Word],
        dictionary: &'a Dictionary,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            game: GameSession::new(target, dictionary, policy),
            targets,
            dictionary,
            policy,
            puzzle,
            messages: vec![Message {
                text: format!("Guess the word! Playing {puzzle}."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Playing,
        }
    }

    /// Feed one input event to the session and react to the outcome
    pub fn apply(&mut self, key: InputKey) {
        match self.game.handle_key(key) {
            KeyOutcome::Rejected(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
            KeyOutcome::Submitted(submission) => self.after_submission(&submission),
            KeyOutcome::Edited | KeyOutcome::Ignored => {}
        }
    }

    fn after_submission(&mut self, submission: &Submission) {
        match submission.state {
            GameState::Won => {
                let turns = self.game.guesses_used();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if turns <= MAX_GUESSES {
                    self.stats.guess_distribution[turns] += 1;
                }

                self.input_mode = InputMode::GameOver;
                self.add_message("You Win", MessageStyle::Success);

                let phrase = match turns {
                    1 => "🎯 Hole in one!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Splendid!",
                    4 => "👏 Great job!",
                    _ => "🎉 Got it!",
                };
                self.add_message(phrase, MessageStyle::Success);
                self.add_message("Press 'n' for a practice game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;

                if let Some(answer) = &submission.revealed {
                    self.add_message(
                        &format!("Correct Word: {}", answer.text().to_uppercase()),
                        MessageStyle::Error,
                    );
                }
                self.add_message("Press 'n' for a practice game or 'q' to quit.", MessageStyle::Info);
            }
            GameState::InProgress => {}
        }
    }

    /// Start a fresh practice game with a random target
    pub fn new_practice_game(&mut self) {
        match game::random(self.targets) {
            Ok(target) => {
                self.game = GameSession::new(target.clone(), self.dictionary, self.policy);
                self.puzzle = Puzzle::Practice;
                self.input_mode = InputMode::Playing;
                self.messages.clear();
                self.add_message("New practice game started!", MessageStyle::Info);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
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

            match app.input_mode {
                InputMode::Playing => {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        // Every letter is game input here; quitting is Esc only
                        KeyCode::Char(c) => {
                            app.apply(InputKey::Letter(c));
                        }
                        KeyCode::Backspace => {
                            app.apply(InputKey::Delete);
                        }
                        KeyCode::Enter => {
                            app.apply(InputKey::Submit);
                        }
                        _ => {}
                    }
                }
                InputMode::GameOver => {
                    // Game input is detached once the session ends
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_practice_game();
                        }
                        _ => {}
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
