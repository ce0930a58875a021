//! Wordle Daily - CLI
//!
//! Daily 5-letter word-guessing game with TUI and line modes.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use wordle_daily::{
    commands::{ScoreConfig, run_simple, score_guesses},
    core::{MatchPolicy, Word},
    game::{self, Puzzle},
    output::print_score_result,
    wordlists::{Dictionary, TARGETS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily 5-letter word-guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a custom target list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Use duplicate-aware letter scoring instead of the classic rule
    #[arg(long, global = true)]
    exact: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        #[command(flatten)]
        pick: TargetPick,
    },

    /// Line-based mode without the TUI
    Simple {
        #[command(flatten)]
        pick: TargetPick,
    },

    /// Score a sequence of guesses against a known answer
    Score {
        /// The answer word
        answer: String,

        /// Guesses to evaluate, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

/// How to choose the target word (default: today's daily puzzle)
#[derive(clap::Args)]
struct TargetPick {
    /// Play the daily puzzle of a specific date (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["answer", "random"])]
    date: Option<NaiveDate>,

    /// Practice against a chosen answer word
    #[arg(long, conflicts_with = "random")]
    answer: Option<String>,

    /// Practice against a random answer word
    #[arg(long)]
    random: bool,
}

/// Load the target schedule and guess dictionary based on the -w flag
///
/// A custom file replaces the daily schedule; its words are also added to
/// the dictionary so they stay guessable.
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Dictionary)> {
    use wordle_daily::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => {
            let targets = words_from_slice(TARGETS);
            Ok((targets, Dictionary::embedded()))
        }
        path => {
            let targets = load_from_file(path)
                .with_context(|| format!("Failed to read wordlist '{path}'"))?;
            if targets.is_empty() {
                bail!("Wordlist '{path}' contains no valid 5-letter words");
            }
            let mut dictionary = Dictionary::embedded();
            dictionary.extend_from_words(&targets);
            Ok((targets, dictionary))
        }
    }
}

/// Resolve the session's target word and puzzle label
fn resolve_target(targets: &[Word], pick: &TargetPick) -> Result<(Word, Puzzle)> {
    if let Some(answer) = &pick.answer {
        let word = Word::new(answer).map_err(|e| anyhow::anyhow!("Invalid answer word: {e}"))?;
        return Ok((word, Puzzle::Practice));
    }

    if pick.random {
        let word = game::random(targets)?;
        return Ok((word.clone(), Puzzle::Practice));
    }

    let now = pick.date.map_or_else(game::now_local, |date| {
        // Noon avoids any edge-of-day ambiguity for an explicit date
        date.and_hms_opt(12, 0, 0).expect("valid noon time")
    });

    let index = game::day_index(now);
    let word = game::for_day(targets, index)?;
    Ok((word.clone(), Puzzle::Daily(index)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (targets, dictionary) = load_wordlists(&cli.wordlist)?;
    let policy = if cli.exact {
        MatchPolicy::Exact
    } else {
        MatchPolicy::Containment
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        pick: TargetPick {
            date: None,
            answer: None,
            random: false,
        },
    });

    match command {
        Commands::Play { pick } => {
            let (target, puzzle) = resolve_target(&targets, &pick)?;
            run_play_command(target, puzzle, &targets, &dictionary, policy)
        }
        Commands::Simple { pick } => {
            let (target, puzzle) = resolve_target(&targets, &pick)?;
            run_simple(target, puzzle, &targets, &dictionary, policy)
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { answer, guesses } => {
            let config = ScoreConfig {
                answer,
                guesses,
                policy,
            };
            let result = score_guesses(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    target: Word,
    puzzle: Puzzle,
    targets: &[Word],
    dictionary: &Dictionary,
    policy: MatchPolicy,
) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let app = App::new(target, puzzle, targets, dictionary, policy);
    run_tui(app)
}
