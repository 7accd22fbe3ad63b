//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line. Blank lines and entries that aren't 5-letter words are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::lexicon::loader::load_from_file;
///
/// let words = load_from_file("extra_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::lexicon::loader::words_from_slice;
/// use wordle_game::lexicon::HARD;
///
/// let words = words_from_slice(HARD);
/// assert_eq!(words.len(), HARD.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["apple", "beach", "chair"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "beach");
        assert_eq!(words[2].text(), "chair");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["apple", "toolong", "abc", "beach"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "beach");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn words_from_lines_trims_and_skips() {
        let words = words_from_lines("  Steam \n\nbread\nnope\n12345\n");
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["steam", "bread"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }
}
