//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::game::{Difficulty, Game, GameError, Input, Snapshot, TargetPicker};
use crate::interactive::Statistics;
use crate::output::{print_board, print_game_over, print_statistics};
use anyhow::Result;
use std::io::{self, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Level(String),
    Guess(String),
    Empty,
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "" => Self::Empty,
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" => Self::NewGame,
            other => match other.strip_prefix(":level") {
                Some(name) => Self::Level(name.trim().to_string()),
                None => Self::Guess(other.to_string()),
            },
        }
    }
}

/// Type a whole word into a fresh row and submit it
///
/// The row is cleared first, so a rejected word never leaks letters into the
/// next attempt.
///
/// # Errors
///
/// Returns the first error raised by the game while entering or submitting.
pub fn enter_word<P: TargetPicker>(game: &mut Game<'_, P>, word: &str) -> Result<Snapshot, GameError> {
    clear_row(game);

    let outcome = word
        .chars()
        .try_for_each(|ch| game.handle(Input::Letter(ch)).map(|_| ()))
        .and_then(|()| game.handle(Input::Submit));

    if outcome.is_err() {
        clear_row(game);
    }
    outcome
}

fn clear_row<P: TargetPicker>(game: &mut Game<'_, P>) {
    for _ in 0..game.state().col() {
        game.delete_letter();
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<P: TargetPicker>(game: &mut Game<'_, P>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Text Mode                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a 5-letter word and press Enter to guess.");
    println!("Commands: ':new' for a new game, ':level easy|medium|hard', ':quit' to exit\n");

    let mut stats = Statistics::default();
    print_level(game);

    loop {
        let snapshot = game.snapshot();
        let prompt = format!("Guess {}/{}", snapshot.guess_number(), snapshot.max_guesses);

        let Some(line) = get_user_input(&prompt)? else {
            break;
        };

        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::NewGame => {
                game.new_game();
                println!("\n🔄 New game started!\n");
            }
            Command::Level(name) => match name.parse::<Difficulty>() {
                Ok(level) => {
                    game.apply_level(level)?;
                    print_level(game);
                }
                Err(err) => println!("❌ {err}\n"),
            },
            Command::Guess(word) => {
                if word.chars().count() > snapshot.word_length {
                    println!("❌ word too long\n");
                    continue;
                }

                match enter_word(game, &word) {
                    Ok(snapshot) => {
                        print_board(&snapshot);
                        if snapshot.over {
                            stats.record(&snapshot);
                            print_game_over(&snapshot);

                            if !play_again()? {
                                break;
                            }
                            game.new_game();
                            println!("\n🔄 New game started!\n");
                        }
                    }
                    Err(GameError::IncompleteGuess { .. }) => println!("❌ word too short\n"),
                    Err(GameError::UnknownWord(_)) => println!("❌ not in word list\n"),
                    Err(err) => println!("❌ {err}\n"),
                }
            }
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_level<P: TargetPicker>(game: &Game<'_, P>) {
    let profile = game.profile();
    println!(
        "level: {} ({} guesses)\n",
        profile.level, profile.max_guesses
    );
}

fn play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
