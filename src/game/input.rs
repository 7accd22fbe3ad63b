//! Typed input events from a front-end

use super::difficulty::Difficulty;
use super::error::Result;
use super::picker::TargetPicker;
use super::snapshot::Snapshot;
use super::state::Game;

/// Raw input a front-end forwards to the game, one operation each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Delete,
    Submit,
    NewGame(Difficulty),
    ChangeLevel(Difficulty),
}

impl<P: TargetPicker> Game<'_, P> {
    /// Apply one input and return the resulting snapshot
    ///
    /// # Errors
    /// Propagates the error of the underlying operation; the game is left
    /// unchanged and `snapshot()` still describes it.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{Difficulty, FixedPicker, Game, GameError, Input};
    /// use wordle_game::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::embedded();
    /// let mut game = Game::new(&lexicon, Difficulty::Easy, FixedPicker::new("apple")).unwrap();
    ///
    /// let snapshot = game.handle(Input::Letter('a')).unwrap();
    /// assert_eq!(snapshot.col, 1);
    ///
    /// let err = game.handle(Input::Submit).unwrap_err();
    /// assert!(matches!(err, GameError::IncompleteGuess { .. }));
    /// ```
    pub fn handle(&mut self, input: Input) -> Result<Snapshot> {
        match input {
            Input::Letter(ch) => self.add_letter(ch)?,
            Input::Delete => self.delete_letter(),
            Input::Submit => {
                self.submit_guess()?;
            }
            Input::NewGame(level) => self.reset(level)?,
            Input::ChangeLevel(level) => self.apply_level(level)?,
        }

        Ok(self.snapshot())
    }
}
