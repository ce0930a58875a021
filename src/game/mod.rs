//! Game session logic
//!
//! The session state machine, keyboard display aggregation, and target
//! selection. Everything mutable about a running game lives here; the
//! presentation layers only translate events in and render state out.

mod keyboard;
mod session;
mod target;

pub use keyboard::KeyboardState;
pub use session::{
    GameSession, GameState, GuessError, InputKey, KeyOutcome, MAX_GUESSES, PlayedRow, Submission,
};
pub use target::{
    DAY_LENGTH_MS, Puzzle, TargetError, daily, day_index, for_day, now_local, random,
};
