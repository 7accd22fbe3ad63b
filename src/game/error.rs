//! Errors surfaced by game operations.
//!
//! Every failure leaves the game exactly as it was before the call.

use crate::core::WordError;
use thiserror::Error;

/// Errors surfaced by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("word too short: {len} of {expected} letters")]
    IncompleteGuess { len: usize, expected: usize },

    #[error("not in word list: {0}")]
    UnknownWord(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input {0:?}: expected a letter a-z")]
    InvalidInput(char),

    #[error("game is over")]
    GameOver,

    #[error(transparent)]
    Word(#[from] WordError),
}

pub type Result<T> = std::result::Result<T, GameError>;
