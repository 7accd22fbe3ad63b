//! Game engine
//!
//! Difficulty profiles, target selection and the state machine driving one
//! round: type letters, submit, win or run out of rows.

mod difficulty;
mod error;
mod input;
mod picker;
mod snapshot;
mod state;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use error::{GameError, Result};
pub use input::Input;
pub use picker::{FixedPicker, RandomPicker, TargetPicker};
pub use snapshot::Snapshot;
pub use state::{Game, GameState, GameStatus};
