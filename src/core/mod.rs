//! Core domain types for the game
//!
//! Words, the scoring algorithm and keyboard hints. Everything here is pure:
//! no randomness, no I/O, no game state.

mod hints;
mod verdict;
mod word;

pub use hints::KeyboardHints;
pub use verdict::{GuessResult, LetterVerdict};
pub use word::{WORD_LENGTH, Word, WordError};
