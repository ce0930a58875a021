//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_loss_banner, print_score_result, print_win_banner};
