//! Formatting utilities for terminal output

use crate::core::{GuessResult, KeyboardHints, LetterVerdict};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A letter as a coloured tile, uncoloured when there is no verdict
#[must_use]
pub fn colored_tile(letter: char, verdict: Option<LetterVerdict>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());

    match verdict {
        Some(LetterVerdict::Correct) => text.black().on_green().bold(),
        Some(LetterVerdict::Present) => text.black().on_yellow().bold(),
        Some(LetterVerdict::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A scored guess as a row of coloured tiles
#[must_use]
pub fn guess_row(guess: &str, result: &GuessResult) -> String {
    guess
        .chars()
        .zip(result.verdicts())
        .map(|(letter, &verdict)| colored_tile(letter, Some(verdict)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard, one line per row, indented like a real keyboard
#[must_use]
pub fn keyboard_lines(hints: &KeyboardHints) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|key| colored_tile(key, hints.get(key)).to_string())
                .collect();
            format!("{}{}", "  ".repeat(indent), keys.join(""))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn guess_row_contains_uppercase_letters() {
        let guess = Word::new("rhino").unwrap();
        let target = Word::new("ivory").unwrap();
        let row = guess_row(guess.text(), &GuessResult::score(&guess, &target));

        for letter in ["R", "H", "I", "N", "O"] {
            assert!(row.contains(letter));
        }
    }

    #[test]
    fn keyboard_has_three_rows() {
        let lines = keyboard_lines(&KeyboardHints::new());
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('Q'));
        assert!(lines[1].starts_with("  "));
        assert!(lines[2].contains('M'));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
