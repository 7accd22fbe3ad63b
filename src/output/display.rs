//! Display functions for the text front-ends

use super::formatters::{create_progress_bar, guess_row, keyboard_lines};
use crate::core::{GuessResult, LetterVerdict, Word};
use crate::game::Snapshot;
use crate::interactive::Statistics;
use colored::Colorize;

/// Print every scored row of the game so far, then the keyboard
pub fn print_board(snapshot: &Snapshot) {
    println!();
    for (i, (guess, result)) in snapshot.guesses.iter().enumerate() {
        println!(
            "  {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            guess_row(guess, result),
            result.to_emoji()
        );
    }
    println!();

    for line in keyboard_lines(&snapshot.hints) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(snapshot: &Snapshot) {
    let target = snapshot.target.as_deref().unwrap_or_default().to_uppercase();

    println!("{}", "═".repeat(50).bright_cyan());
    if snapshot.won {
        println!("{}", "  🎉 you won!".bright_green().bold());
        println!(
            "  Solved in {} of {} guesses",
            snapshot.guesses.len().to_string().bright_cyan().bold(),
            snapshot.max_guesses
        );
    } else {
        println!("{}", "  game over".red().bold());
    }
    println!("  the word was: {}", target.bright_yellow().bold());
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print the result of scoring one guess against a target
pub fn print_score_result(guess: &Word, target: &Word, result: &GuessResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().to_uppercase().bright_white().bold(),
        target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", guess_row(guess.text(), result));
    println!("  {}\n", result.to_emoji());

    println!(
        "  Correct: {}  Present: {}  Absent: {}",
        result.count(LetterVerdict::Correct).to_string().green(),
        result.count(LetterVerdict::Present).to_string().yellow(),
        result.count(LetterVerdict::Absent)
    );
}

/// Print the session summary
pub fn print_statistics(stats: &Statistics) {
    if stats.total_games == 0 {
        return;
    }

    println!("\n📈 {}", "Session:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!("   Win rate:      {:.0}%", stats.win_rate());

    let max = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, max as f64, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
}
