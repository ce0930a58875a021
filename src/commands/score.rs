//! Offline guess scoring
//!
//! Evaluates a fixed sequence of guesses against a given answer, driving the
//! same session machinery as interactive play. Useful for scripting and for
//! checking how a finished game would have scored under the other policy.

use crate::core::{MatchPolicy, Word};
use crate::game::{GameSession, GameState, InputKey, KeyOutcome};
use crate::wordlists::Dictionary;

/// Configuration for a scoring run
pub struct ScoreConfig {
    pub answer: String,
    pub guesses: Vec<String>,
    pub policy: MatchPolicy,
}

/// A single scored guess
#[derive(Debug)]
pub struct ScoredRow {
    pub word: Word,
    pub feedback: crate::core::Feedback,
}

/// Result of a scoring run
#[derive(Debug)]
pub struct ScoreResult {
    pub answer: String,
    pub rows: Vec<ScoredRow>,
    pub solved: bool,
    /// Guesses supplied after the game had already ended
    pub unused: usize,
}

/// Score a sequence of guesses against the answer
///
/// # Errors
///
/// Returns an error if the answer or any guess is not a valid 5-letter word,
/// or if a guess is rejected by the dictionary.
pub fn score_guesses(config: &ScoreConfig, dictionary: &Dictionary) -> Result<ScoreResult, String> {
    let answer = Word::new(&config.answer).map_err(|e| format!("Invalid answer word: {e}"))?;

    let mut game = GameSession::new(answer, dictionary, config.policy);
    let mut rows = Vec::with_capacity(config.guesses.len());
    let mut unused = 0;

    for guess in &config.guesses {
        if game.state().is_over() {
            unused += 1;
            continue;
        }

        // Validate up front; feeding an overlong word through the buffer
        // would silently truncate it instead
        let word = Word::new(guess).map_err(|e| format!("Invalid guess '{guess}': {e}"))?;

        for ch in word.text().chars() {
            game.handle_key(InputKey::Letter(ch));
        }
        match game.handle_key(InputKey::Submit) {
            KeyOutcome::Submitted(submission) => {
                rows.push(ScoredRow {
                    word: submission.guess,
                    feedback: submission.feedback,
                });
            }
            KeyOutcome::Rejected(e) => {
                return Err(format!("Guess '{guess}': {e}"));
            }
            KeyOutcome::Edited | KeyOutcome::Ignored => unreachable!("submit never edits"),
        }
    }

    Ok(ScoreResult {
        answer: config.answer.to_lowercase(),
        rows,
        solved: game.state() == GameState::Won,
        unused,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_GUESSES;

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&[
            "crane", "react", "slate", "jumbo", "moist", "quilt", "vouch",
        ])
    }

    fn config(answer: &str, guesses: &[&str]) -> ScoreConfig {
        ScoreConfig {
            answer: answer.to_string(),
            guesses: guesses.iter().map(ToString::to_string).collect(),
            policy: MatchPolicy::Containment,
        }
    }

    #[test]
    fn score_winning_sequence() {
        let dict = dictionary();
        let result = score_guesses(&config("crane", &["slate", "crane"]), &dict).unwrap();

        assert!(result.solved);
        assert_eq!(result.rows.len(), 2);
        assert_eq!(result.rows[1].word.text(), "crane");
        assert!(result.rows[1].feedback.is_win());
        assert_eq!(result.unused, 0);
    }

    #[test]
    fn score_unsolved_sequence() {
        let dict = dictionary();
        let result = score_guesses(&config("crane", &["slate", "react"]), &dict).unwrap();

        assert!(!result.solved);
        assert_eq!(result.rows.len(), 2);
    }

    #[test]
    fn score_counts_guesses_after_the_end() {
        let dict = dictionary();
        let result = score_guesses(&config("crane", &["crane", "slate", "react"]), &dict).unwrap();

        assert!(result.solved);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.unused, 2);
    }

    #[test]
    fn score_stops_filling_after_grid_is_full() {
        let dict = dictionary();
        let misses = ["slate", "jumbo", "moist", "quilt", "vouch", "react"];
        let result = score_guesses(&config("crane", &misses), &dict).unwrap();

        assert!(!result.solved);
        assert_eq!(result.rows.len(), MAX_GUESSES);
        assert_eq!(result.unused, misses.len() - MAX_GUESSES);
    }

    #[test]
    fn score_rejects_unknown_guess() {
        let dict = dictionary();
        let result = score_guesses(&config("crane", &["zzzzz"]), &dict);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("zzzzz"));
    }

    #[test]
    fn score_rejects_invalid_answer() {
        let dict = dictionary();
        let result = score_guesses(&config("toolong", &["slate"]), &dict);

        assert!(result.is_err());
    }

    #[test]
    fn score_rejects_malformed_guess() {
        let dict = dictionary();
        let result = score_guesses(&config("crane", &["abc"]), &dict);

        assert!(result.is_err());
    }
}
