//! Word lists for the game
//!
//! Provides the embedded daily target schedule and guess dictionary, plus the
//! [`Dictionary`] membership set the game validates guesses against.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Set of valid guessable words
///
/// Membership is the only query the game ever makes, so the words live in a
/// hash set rather than an ordered list.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from string slices, skipping invalid entries
    #[must_use]
    pub fn from_slice(words: &[&str]) -> Self {
        let words = words
            .iter()
            .filter_map(|&s| Word::new(s).ok())
            .map(|w| w.text().to_string())
            .collect();
        Self { words }
    }

    /// Build a dictionary from already-validated words
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let words = words.iter().map(|w| w.text().to_string()).collect();
        Self { words }
    }

    /// The embedded dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(DICTIONARY)
    }

    /// Membership test (expects lowercase input; [`Word`] text always is)
    #[inline]
    #[must_use]
    pub fn contains(&self, guess: &str) -> bool {
        self.words.contains(guess)
    }

    /// Add words to the dictionary (custom lists stay guessable)
    pub fn extend_from_words(&mut self, words: &[Word]) {
        self.words
            .extend(words.iter().map(|w| w.text().to_string()));
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
