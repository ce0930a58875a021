//! Display functions for command results

use super::formatters::tile_row;
use crate::commands::ScoreResult;
use crate::core::Word;
use crate::game::MAX_GUESSES;
use colored::Colorize;

/// Print the result of an offline scoring run
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Answer: {}",
        result.answer.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, row) in result.rows.iter().enumerate() {
        println!(
            "\nGuess {}: {}  {}",
            i + 1,
            tile_row(&row.word, &row.feedback),
            row.feedback.to_emoji()
        );
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.rows.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} guesses", result.rows.len())
                .red()
                .bold()
        );
    }

    if result.unused > 0 {
        println!(
            "{}",
            format!("({} guesses after the game ended were ignored)", result.unused).bright_black()
        );
    }
}

/// Print the win banner for an interactive game
pub fn print_win_banner(turns: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "  🎉  Y O U   W I N  🎉  ".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    let phrase = match turns {
        1 => "Hole in one!",
        2 => "Magnificent!",
        3 => "Splendid!",
        4 => "Great job!",
        _ => "Got it!",
    };

    println!("\n  {}", phrase.bright_yellow().bold());
    println!(
        "  Solved in {} of {} {}\n",
        turns.to_string().bright_cyan().bold(),
        MAX_GUESSES,
        if turns == 1 { "guess" } else { "guesses" }
    );
}

/// Print the loss banner, revealing the target
pub fn print_loss_banner(target: &Word) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        format!("  Correct Word: {}  ", target.text().to_uppercase())
            .bright_red()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!();
}
