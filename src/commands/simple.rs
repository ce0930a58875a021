//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one whole guess per line, fed through
//! the same input state machine as interactive play.

use crate::core::{MatchPolicy, WORD_LENGTH, Word};
use crate::game::{
    self, GameSession, GameState, InputKey, KeyOutcome, MAX_GUESSES, Puzzle, Submission,
};
use crate::output::formatters::tile_row;
use crate::output::{print_loss_banner, print_win_banner};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based game
///
/// # Errors
///
/// Returns an error if reading user input fails, or if a replacement
/// practice target cannot be drawn from an empty target list.
pub fn run_simple(
    target: Word,
    puzzle: Puzzle,
    targets: &[Word],
    dictionary: &Dictionary,
    policy: MatchPolicy,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordle Daily                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.");
    println!("Commands: 'quit' to exit, 'new' for a practice game\n");

    let mut target = target;
    let mut puzzle = puzzle;

    'games: loop {
        let mut game = GameSession::new(target.clone(), dictionary, policy);
        println!("────────────────────────────────────────────────────────────");
        println!("Playing: {puzzle}");
        println!("────────────────────────────────────────────────────────────\n");

        loop {
            let prompt = format!("Guess {}/{}", game.guesses_used() + 1, MAX_GUESSES);
            let input = get_user_input(&prompt)?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    (target, puzzle) = practice_game(targets)?;
                    println!("\n🔄 New practice game started!\n");
                    continue 'games;
                }
                _ => {}
            }

            // The buffer silently caps at WORD_LENGTH presses, which would
            // truncate an overlong line into a plausible-looking guess
            if input.len() > WORD_LENGTH {
                println!("{}\n", "Too many letters".red());
                continue;
            }

            for ch in input.chars() {
                game.handle_key(InputKey::Letter(ch));
            }

            match game.handle_key(InputKey::Submit) {
                KeyOutcome::Rejected(e) => {
                    println!("{}\n", e.to_string().red());
                    // Line mode retypes the whole guess, so drop the buffer
                    while game.handle_key(InputKey::Delete) == KeyOutcome::Edited {}
                }
                KeyOutcome::Submitted(submission) => {
                    print_submission(&submission);

                    if submission.state.is_over() {
                        finish_game(&game, &submission);
                        if !play_again()? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        (target, puzzle) = practice_game(targets)?;
                        println!("\n🔄 New practice game started!\n");
                        continue 'games;
                    }
                }
                KeyOutcome::Edited | KeyOutcome::Ignored => {}
            }
        }
    }
}

fn print_submission(submission: &Submission) {
    println!(
        "\n  {}  {}\n",
        tile_row(&submission.guess, &submission.feedback),
        submission.feedback.to_emoji()
    );
}

fn finish_game(game: &GameSession, submission: &Submission) {
    match submission.state {
        GameState::Won => {
            print_win_banner(game.guesses_used());

            // Emoji recap of the whole grid
            println!("  Your game:");
            for row in game.rows() {
                println!("    {}", row.feedback().to_emoji());
            }
            println!();
        }
        GameState::Lost => {
            if let Some(answer) = &submission.revealed {
                print_loss_banner(answer);
            }
        }
        GameState::InProgress => {}
    }
}

fn practice_game(targets: &[Word]) -> Result<(Word, Puzzle), String> {
    let target = game::random(targets).map_err(|e| e.to_string())?;
    Ok((target.clone(), Puzzle::Practice))
}

fn play_again() -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
