//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore, Word};
use colored::Colorize;

/// Format one tile as a colored block
#[must_use]
pub fn tile(letter: u8, score: LetterScore) -> String {
    let cell = format!(" {} ", (letter as char).to_ascii_uppercase());
    match score {
        LetterScore::Correct => cell.black().on_green().to_string(),
        LetterScore::WrongLocation => cell.black().on_yellow().to_string(),
        LetterScore::Wrong => cell.white().on_bright_black().to_string(),
    }
}

/// Format a scored row as colored blocks
#[must_use]
pub fn tile_row(guess: &Word, feedback: &Feedback) -> String {
    feedback
        .iter()
        .enumerate()
        .map(|(i, score)| tile(guess.letter_at(i), score))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchPolicy;

    fn plain() {
        // Strip ANSI codes so assertions see bare text
        colored::control::set_override(false);
    }

    #[test]
    fn tile_uppercases_letter() {
        plain();
        assert_eq!(tile(b'a', LetterScore::Correct), " A ");
        assert_eq!(tile(b'z', LetterScore::Wrong), " Z ");
    }

    #[test]
    fn tile_row_joins_all_positions() {
        plain();
        let guess = Word::new("slate").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::score(&guess, &target, MatchPolicy::Containment);

        assert_eq!(tile_row(&guess, &feedback), " S   L   A   T   E ");
    }
}
