//! Terminal output formatting
//!
//! Display utilities for the text front-ends and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_score_result, print_statistics};
