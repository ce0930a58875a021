//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreConfig, ScoreResult, ScoredRow, score_guesses};
pub use simple::run_simple;
