//! Game session state machine
//!
//! A [`GameSession`] owns everything mutable about one game: the in-progress
//! guess buffer, the played rows, the keyboard display state, and the
//! win/lose state. All mutation goes through [`GameSession::handle_key`],
//! dispatched on [`InputKey`]; whatever event source the host provides
//! (terminal keys, line input, tests) only has to produce those three kinds
//! of input. Once the state is terminal every key is ignored.

use crate::core::{Feedback, MatchPolicy, WORD_LENGTH, Word};
use crate::game::keyboard::KeyboardState;
use crate::wordlists::Dictionary;
use std::fmt;

/// Maximum number of guesses; the grid is square
pub const MAX_GUESSES: usize = WORD_LENGTH;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// True once the game has ended, in either direction
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One discrete player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// A letter key (case-folded on entry)
    Letter(char),
    /// Remove the last buffered letter
    Delete,
    /// Submit the buffered guess
    Submit,
}

/// Recoverable submission failures; both leave the session unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The buffer holds fewer than `WORD_LENGTH` letters
    TooShort { len: usize },
    /// The buffered word is not in the dictionary
    NotInWordList(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The exact alert strings players see
        match self {
            Self::TooShort { .. } => write!(f, "Not enough length"),
            Self::NotInWordList(_) => write!(f, "Not in word list"),
        }
    }
}

impl std::error::Error for GuessError {}

/// A scored row of the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedRow {
    guess: Word,
    feedback: Feedback,
}

impl PlayedRow {
    /// The submitted word
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The per-letter scores for the row
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Report of one accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Zero-based row index that was just played
    pub row: usize,
    /// The word that was evaluated
    pub guess: Word,
    /// Scores for the row
    pub feedback: Feedback,
    /// Session state after this submission
    pub state: GameState,
    /// The target word, carried exactly once: on the losing submission
    pub revealed: Option<Word>,
}

/// What a key press did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The buffer changed
    Edited,
    /// Nothing happened (full/empty buffer, non-letter, or game over)
    Ignored,
    /// A guess was accepted and scored
    Submitted(Submission),
    /// A guess was refused; session untouched
    Rejected(GuessError),
}

/// One game: a target word, a dictionary to validate against, and the grid
pub struct GameSession<'a> {
    target: Word,
    dictionary: &'a Dictionary,
    policy: MatchPolicy,
    buffer: String,
    rows: Vec<PlayedRow>,
    keyboard: KeyboardState,
    state: GameState,
}

impl<'a> GameSession<'a> {
    /// Start a session for the given target
    #[must_use]
    pub fn new(target: Word, dictionary: &'a Dictionary, policy: MatchPolicy) -> Self {
        Self {
            target,
            dictionary,
            policy,
            buffer: String::with_capacity(WORD_LENGTH),
            rows: Vec::with_capacity(MAX_GUESSES),
            keyboard: KeyboardState::default(),
            state: GameState::InProgress,
        }
    }

    /// Dispatch one input event
    ///
    /// The single mutation entry point. Terminal states ignore everything,
    /// which is what keeps a finished grid frozen no matter what the event
    /// source still delivers.
    pub fn handle_key(&mut self, key: InputKey) -> KeyOutcome {
        if self.state.is_over() {
            return KeyOutcome::Ignored;
        }

        match key {
            InputKey::Letter(ch) => {
                if self.press_letter(ch) {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            InputKey::Delete => {
                if self.delete_letter() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            InputKey::Submit => match self.submit_buffer() {
                Ok(submission) => KeyOutcome::Submitted(submission),
                Err(e) => KeyOutcome::Rejected(e),
            },
        }
    }

    /// Append a letter to the buffer; false when nothing changed
    fn press_letter(&mut self, ch: char) -> bool {
        if self.buffer.len() >= WORD_LENGTH || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.buffer.push(ch.to_ascii_lowercase());
        true
    }

    /// Remove the last buffered letter; false when the buffer was empty
    fn delete_letter(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Validate, score, and record the buffered guess
    fn submit_buffer(&mut self) -> Result<Submission, GuessError> {
        if self.buffer.len() < WORD_LENGTH {
            return Err(GuessError::TooShort {
                len: self.buffer.len(),
            });
        }
        if !self.dictionary.contains(&self.buffer) {
            return Err(GuessError::NotInWordList(self.buffer.clone()));
        }

        // Buffer holds exactly WORD_LENGTH lowercase ASCII letters here
        let guess = Word::new(self.buffer.as_str()).expect("buffer content already validated");
        let feedback = Feedback::score(&guess, &self.target, self.policy);

        self.keyboard.record(&guess, &feedback);
        let row = self.rows.len();
        self.rows.push(PlayedRow {
            guess: guess.clone(),
            feedback,
        });
        self.buffer.clear();

        let mut revealed = None;
        if feedback.is_win() {
            self.state = GameState::Won;
        } else if self.rows.len() >= MAX_GUESSES {
            self.state = GameState::Lost;
            revealed = Some(self.target.clone());
        }

        Ok(Submission {
            row,
            guess,
            feedback,
            state: self.state,
            revealed,
        })
    }

    /// Current session state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// The in-progress guess buffer
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Rows played so far, oldest first
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[PlayedRow] {
        &self.rows
    }

    /// Keyboard display state accumulated over the session
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Scoring policy the session runs under
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Number of guesses already used
    #[inline]
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.len()
    }
}
