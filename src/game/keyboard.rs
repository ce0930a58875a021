//! On-screen keyboard display state
//!
//! Each letter key shows the score of the most recently evaluated tile for
//! that letter. There is no precedence rule: a later `WrongLocation` happily
//! overwrites an earlier `Correct`.

use crate::core::{Feedback, LetterScore, Word};

/// Display state for the 26 letter keys
#[derive(Debug, Clone)]
pub struct KeyboardState {
    keys: [Option<LetterScore>; 26],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self { keys: [None; 26] }
    }
}

impl KeyboardState {
    /// Record an evaluated row, tile by tile in position order
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, score) in feedback.iter().enumerate() {
            let slot = usize::from(guess.letter_at(i) - b'a');
            self.keys[slot] = Some(score);
        }
    }

    /// The displayed score for a letter key, if any tile has touched it
    #[must_use]
    pub fn score_for(&self, letter: char) -> Option<LetterScore> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let slot = usize::from(letter.to_ascii_lowercase() as u8 - b'a');
        self.keys[slot]
    }
}
