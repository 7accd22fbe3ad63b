//! Wordle Game
//!
//! A Wordle-style guessing game: a hidden 5-letter word, a limited number of
//! guesses depending on the difficulty level, and letter-by-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Difficulty, Game, Input, RandomPicker};
//! use wordle_game::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::embedded();
//! let mut game = Game::new(&lexicon, Difficulty::Medium, RandomPicker::seeded(3)).unwrap();
//!
//! for ch in "irony".chars() {
//!     game.handle(Input::Letter(ch)).unwrap();
//! }
//! let snapshot = game.handle(Input::Submit).unwrap();
//! println!("{}", snapshot.last_result.unwrap().to_emoji());
//! ```

// Core domain types
pub mod core;

// Word pools and dictionary
pub mod lexicon;

// Game engine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
