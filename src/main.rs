//! Wordle Game - CLI
//!
//! Guess the hidden word, in a TUI or in plain text mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::{run_simple, score_words},
    game::{Difficulty, Game, RandomPicker},
    lexicon::{Lexicon, loader::load_from_file},
    output::print_score_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word before you run out of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (default, 6 guesses), medium (5), hard (4)
    #[arg(short, long, global = true, default_value = "easy")]
    level: String,

    /// Seed for target selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Extra words to accept as guesses, one per line
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let level: Difficulty = cli.level.parse()?;
    let lexicon = load_lexicon(cli.words.as_deref())?;
    let picker = cli.seed.map_or_else(RandomPicker::new, RandomPicker::seeded);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&lexicon, level, picker),
        Commands::Simple => run_simple_command(&lexicon, level, picker),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

/// Embedded lexicon, plus extra guess words from `--words`
fn load_lexicon(words: Option<&Path>) -> Result<Lexicon> {
    let mut lexicon = Lexicon::embedded();

    if let Some(path) = words {
        let extra = load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        tracing::debug!(count = extra.len(), path = %path.display(), "loaded extra words");
        lexicon.extend_dictionary(extra);
    }

    Ok(lexicon)
}

fn run_play_command(lexicon: &Lexicon, level: Difficulty, picker: RandomPicker) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(lexicon, level, picker)?;
    run_tui(app)
}

fn run_simple_command(lexicon: &Lexicon, level: Difficulty, picker: RandomPicker) -> Result<()> {
    let mut game = Game::new(lexicon, level, picker)?;
    run_simple(&mut game)
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let score = score_words(guess, target)?;
    print_score_result(&score.guess, &score.target, &score.result);
    Ok(())
}
