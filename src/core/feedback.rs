//! Per-letter guess feedback
//!
//! Scoring a guess against the target yields one [`LetterScore`] per
//! position. Two scoring rules exist:
//!
//! - [`MatchPolicy::Containment`] (default): a non-exact letter scores
//!   `WrongLocation` whenever the target contains it anywhere. Repeated
//!   guess letters are over-reported; this reproduces the classic rule.
//! - [`MatchPolicy::Exact`]: duplicate-aware. Exact matches claim target
//!   letters first, then `WrongLocation` is granted left to right until the
//!   target's supply of that letter is spent.

use super::{WORD_LENGTH, Word};

/// Score for a single letter of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterScore {
    /// Right letter in the right position
    Correct,
    /// Letter occurs in the target, but not here
    WrongLocation,
    /// Letter does not occur in the target
    Wrong,
}

impl LetterScore {
    /// Emoji tile for share-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongLocation => '🟨',
            Self::Wrong => '⬜',
        }
    }
}

/// How repeated letters are credited when scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Classic containment check; repeated letters over-reported
    #[default]
    Containment,
    /// Duplicate-aware matching limited by the target's letter supply
    Exact,
}

/// Feedback for one submitted guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    scores: [LetterScore; WORD_LENGTH],
}

impl Feedback {
    /// Score `guess` against `target` under the given policy
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::{Feedback, LetterScore, MatchPolicy, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("react").unwrap();
    /// let feedback = Feedback::score(&guess, &target, MatchPolicy::Containment);
    ///
    /// // r, e, a, c all occur in "crane"; t does not
    /// assert_eq!(feedback.scores()[4], LetterScore::Wrong);
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word, policy: MatchPolicy) -> Self {
        match policy {
            MatchPolicy::Containment => Self::score_containment(guess, target),
            MatchPolicy::Exact => Self::score_exact(guess, target),
        }
    }

    /// Classic rule: exact match, else containment anywhere, else wrong
    fn score_containment(guess: &Word, target: &Word) -> Self {
        let mut scores = [LetterScore::Wrong; WORD_LENGTH];

        for (i, score) in scores.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == target.letter_at(i) {
                *score = LetterScore::Correct;
            } else if target.contains(letter) {
                *score = LetterScore::WrongLocation;
            }
        }

        Self { scores }
    }

    /// Duplicate-aware rule
    ///
    /// First pass marks exact matches and removes them from the target's
    /// letter supply; second pass grants `WrongLocation` left to right while
    /// supply remains.
    fn score_exact(guess: &Word, target: &Word) -> Self {
        let mut scores = [LetterScore::Wrong; WORD_LENGTH];
        let mut available = target.letter_counts();

        for (i, score) in scores.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == target.letter_at(i) {
                *score = LetterScore::Correct;
                available[usize::from(letter - b'a')] -= 1;
            }
        }

        for (i, score) in scores.iter_mut().enumerate() {
            if *score == LetterScore::Correct {
                continue;
            }
            let slot = usize::from(guess.letter_at(i) - b'a');
            if available[slot] > 0 {
                *score = LetterScore::WrongLocation;
                available[slot] -= 1;
            }
        }

        Self { scores }
    }

    /// The per-position scores
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.scores
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.scores.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Iterate over the per-position scores
    pub fn iter(&self) -> impl Iterator<Item = LetterScore> + '_ {
        self.scores.iter().copied()
    }

    /// Share-style emoji strip, e.g. "🟨⬜🟩🟩⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.scores.iter().map(|s| s.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Correct, Wrong, WrongLocation};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn matching_guess_is_all_correct_both_policies() {
        let target = word("apple");
        for policy in [MatchPolicy::Containment, MatchPolicy::Exact] {
            let feedback = Feedback::score(&word("apple"), &target, policy);
            assert_eq!(feedback.scores(), &[Correct; WORD_LENGTH]);
            assert!(feedback.is_win());
        }
    }

    #[test]
    fn containment_react_against_crane() {
        // r, e, a, c occur somewhere in "crane"; t nowhere
        let feedback = Feedback::score(&word("react"), &word("crane"), MatchPolicy::Containment);
        assert_eq!(
            feedback.scores(),
            &[WrongLocation, WrongLocation, WrongLocation, WrongLocation, Wrong]
        );
        assert!(!feedback.is_win());
    }

    #[test]
    fn containment_all_wrong() {
        let feedback = Feedback::score(&word("jumbo"), &word("crane"), MatchPolicy::Containment);
        assert_eq!(feedback.scores(), &[Wrong; WORD_LENGTH]);
    }

    #[test]
    fn exact_position_beats_containment() {
        // Positions with an exact match are Correct regardless of the rest
        let feedback = Feedback::score(&word("crate"), &word("crane"), MatchPolicy::Containment);
        assert_eq!(feedback.scores(), &[Correct, Correct, Correct, Wrong, Correct]);
    }

    #[test]
    fn containment_over_reports_duplicates() {
        // "crane" has a single e, yet containment credits every e
        let feedback = Feedback::score(&word("eerie"), &word("crane"), MatchPolicy::Containment);
        assert_eq!(
            feedback.scores(),
            &[WrongLocation, WrongLocation, WrongLocation, Wrong, Correct]
        );
    }

    #[test]
    fn exact_limits_duplicates_to_supply() {
        // The green e at position 4 exhausts the single e in "crane",
        // so the leading e's score Wrong
        let feedback = Feedback::score(&word("eerie"), &word("crane"), MatchPolicy::Exact);
        assert_eq!(
            feedback.scores(),
            &[Wrong, Wrong, WrongLocation, Wrong, Correct]
        );
    }

    #[test]
    fn exact_speed_against_erase() {
        // "erase" holds two e's and an s; both guessed e's and the s are
        // credited, p and d are not
        let feedback = Feedback::score(&word("speed"), &word("erase"), MatchPolicy::Exact);
        assert_eq!(
            feedback.scores(),
            &[WrongLocation, Wrong, WrongLocation, WrongLocation, Wrong]
        );
    }

    #[test]
    fn exact_robot_against_floor() {
        // One o is exactly placed, the other collects the remaining supply
        let feedback = Feedback::score(&word("robot"), &word("floor"), MatchPolicy::Exact);
        assert_eq!(
            feedback.scores(),
            &[WrongLocation, WrongLocation, Wrong, Correct, Wrong]
        );
    }

    #[test]
    fn feedback_symmetry() {
        for text in ["crane", "slate", "zzzzz", "aaaaa"] {
            let w = word(text);
            for policy in [MatchPolicy::Containment, MatchPolicy::Exact] {
                assert!(Feedback::score(&w, &w, policy).is_win());
            }
        }
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::score(&word("react"), &word("crane"), MatchPolicy::Containment);
        assert_eq!(feedback.to_emoji(), "🟨🟨🟨🟨⬜");

        let win = Feedback::score(&word("crane"), &word("crane"), MatchPolicy::Containment);
        assert_eq!(win.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn default_policy_is_containment() {
        assert_eq!(MatchPolicy::default(), MatchPolicy::Containment);
    }
}
