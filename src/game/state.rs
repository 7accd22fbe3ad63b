//! The game state machine
//!
//! A `Game` owns one round's state: the hidden target, the row/column cursor,
//! the scored guesses and the keyboard hints. All mutation goes through its
//! operations, and a failed operation leaves everything untouched.

use super::difficulty::{Difficulty, DifficultyProfile};
use super::error::{GameError, Result};
use super::picker::TargetPicker;
use super::snapshot::Snapshot;
use crate::core::{GuessResult, KeyboardHints, Word};
use crate::lexicon::Lexicon;
use tracing::{debug, info, trace};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// State of one round
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    row: usize,
    letters: Vec<u8>,
    guesses: Vec<(Word, GuessResult)>,
    status: GameStatus,
}

impl GameState {
    fn new(target: Word) -> Self {
        Self {
            target,
            row: 0,
            letters: Vec::new(),
            guesses: Vec::new(),
            status: GameStatus::Playing,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Index of the row being filled (equals the guess budget after a loss)
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Number of letters typed into the current row
    #[must_use]
    pub fn col(&self) -> usize {
        self.letters.len()
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn current_input(&self) -> String {
        self.letters.iter().copied().map(char::from).collect()
    }

    /// Scored guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[(Word, GuessResult)] {
        &self.guesses
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// One caller-owned game, borrowing its word lists from a `Lexicon`
pub struct Game<'a, P: TargetPicker> {
    lexicon: &'a Lexicon,
    picker: P,
    profile: DifficultyProfile<'a>,
    state: GameState,
    hints: KeyboardHints,
}

impl<'a, P: TargetPicker> Game<'a, P> {
    /// Start a game at `level`
    ///
    /// # Errors
    /// Returns `GameError::Config` if the lexicon has no pool for `level`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{Difficulty, FixedPicker, Game};
    /// use wordle_game::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::embedded();
    /// let mut game = Game::new(&lexicon, Difficulty::Hard, FixedPicker::new("ivory")).unwrap();
    ///
    /// for ch in "ivory".chars() {
    ///     game.add_letter(ch).unwrap();
    /// }
    /// let result = game.submit_guess().unwrap();
    ///
    /// assert!(result.is_win());
    /// assert!(game.state().is_won());
    /// ```
    pub fn new(lexicon: &'a Lexicon, level: Difficulty, mut picker: P) -> Result<Self> {
        let profile = DifficultyProfile::new(lexicon, level)?;
        let state = GameState::new(picker.pick(profile.pool()).clone());
        debug!(level = %level, "new game");
        trace!(target_word = %state.target, "target drawn");

        Ok(Self {
            lexicon,
            picker,
            profile,
            state,
            hints: KeyboardHints::new(),
        })
    }

    /// Start over under the current profile with a fresh target
    pub fn new_game(&mut self) {
        let target = self.picker.pick(self.profile.pool()).clone();
        debug!(level = %self.profile.level, "new game");
        trace!(target_word = %target, "target drawn");

        self.state = GameState::new(target);
        self.hints.clear();
    }

    /// Start over under the profile for `level`
    ///
    /// # Errors
    /// Returns `GameError::Config` if the lexicon has no pool for `level`; the
    /// current game is left as it was.
    pub fn reset(&mut self, level: Difficulty) -> Result<()> {
        self.profile = DifficultyProfile::new(self.lexicon, level)?;
        self.new_game();
        Ok(())
    }

    /// Switch difficulty, discarding the current game
    ///
    /// # Errors
    /// Same as [`Game::reset`].
    pub fn apply_level(&mut self, level: Difficulty) -> Result<()> {
        self.reset(level)
    }

    /// Type a letter into the current row
    ///
    /// Uppercase ASCII is accepted and lowercased. Does nothing once the row
    /// is full or the game is over.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` for anything but an ASCII letter.
    pub fn add_letter(&mut self, ch: char) -> Result<()> {
        if !ch.is_ascii_alphabetic() {
            return Err(GameError::InvalidInput(ch));
        }
        if self.state.is_over() || self.state.col() >= self.profile.word_length {
            return Ok(());
        }

        // ASCII checked above
        self.state.letters.push(ch.to_ascii_lowercase() as u8);
        Ok(())
    }

    /// Remove the last letter of the current row, if any
    pub fn delete_letter(&mut self) {
        if self.state.is_over() {
            return;
        }
        self.state.letters.pop();
    }

    /// Score the current row
    ///
    /// A correct guess wins even on the last allowed row; otherwise the
    /// cursor moves to the next row and the game is lost once the rows run out.
    ///
    /// # Errors
    /// - `GameError::GameOver` if the game has already ended
    /// - `GameError::IncompleteGuess` if the row isn't full
    /// - `GameError::UnknownWord` if the row isn't in the dictionary
    ///
    /// The state is unchanged in every error case.
    pub fn submit_guess(&mut self) -> Result<GuessResult> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }

        let expected = self.profile.word_length;
        let len = self.state.col();
        if len != expected {
            debug!(len, expected, "guess rejected: incomplete");
            return Err(GameError::IncompleteGuess { len, expected });
        }

        let text = self.state.current_input();
        if !self.lexicon.is_valid_guess(&text) {
            debug!(guess = %text, "guess rejected: not in word list");
            return Err(GameError::UnknownWord(text));
        }

        let guess = Word::new(text)?;
        let result = GuessResult::score(&guess, &self.state.target);
        debug!(guess = %guess, row = self.state.row, result = %result.to_emoji(), "guess scored");

        self.hints.fold(&guess, &result);
        self.state.guesses.push((guess, result));

        if result.is_win() {
            self.state.status = GameStatus::Won;
            info!(guesses = self.state.guesses.len(), "game won");
            return Ok(result);
        }

        self.state.row += 1;
        self.state.letters.clear();

        if self.state.row >= self.profile.max_guesses {
            self.state.status = GameStatus::Lost;
            info!(target_word = %self.state.target, "game lost");
        }

        Ok(result)
    }

    /// Immutable copy of everything a renderer needs
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.profile, &self.state, &self.hints)
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    #[must_use]
    pub const fn profile(&self) -> &DifficultyProfile<'a> {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict::{Absent, Correct, Present};
    use crate::game::picker::{FixedPicker, RandomPicker};

    fn game<'a>(lexicon: &'a Lexicon, level: Difficulty, target: &str) -> Game<'a, FixedPicker> {
        Game::new(lexicon, level, FixedPicker::new(target)).unwrap()
    }

    fn type_word<P: TargetPicker>(game: &mut Game<'_, P>, word: &str) {
        for ch in word.chars() {
            game.add_letter(ch).unwrap();
        }
    }

    fn guess<P: TargetPicker>(game: &mut Game<'_, P>, word: &str) -> Result<GuessResult> {
        type_word(game, word);
        game.submit_guess()
    }

    #[test]
    fn new_game_starts_playing_at_origin() {
        let lexicon = Lexicon::embedded();
        let game = game(&lexicon, Difficulty::Easy, "apple");

        assert_eq!(game.state().row(), 0);
        assert_eq!(game.state().col(), 0);
        assert_eq!(game.state().status(), GameStatus::Playing);
        assert!(game.state().guesses().is_empty());
        assert_eq!(game.state().target().text(), "apple");
        assert_eq!(game.profile().max_guesses, 6);
    }

    #[test]
    fn add_and_delete_letters() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Easy, "apple");

        type_word(&mut game, "BeA");
        assert_eq!(game.state().current_input(), "bea");
        assert_eq!(game.state().col(), 3);

        game.delete_letter();
        assert_eq!(game.state().current_input(), "be");
    }

    #[test]
    fn add_letter_rejects_non_letters() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Easy, "apple");
        game.add_letter('a').unwrap();

        for ch in ['1', ' ', 'é', '-'] {
            assert_eq!(game.add_letter(ch), Err(GameError::InvalidInput(ch)));
        }
        assert_eq!(game.state().current_input(), "a");
    }

    #[test]
    fn add_letter_on_full_row_is_noop() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Easy, "apple");

        type_word(&mut game, "beach");
        game.add_letter('x').unwrap();
        assert_eq!(game.state().current_input(), "beach");
        assert_eq!(game.state().col(), 5);
    }

    #[test]
    fn delete_on_empty_row_is_noop() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Easy, "apple");

        game.delete_letter();
        assert_eq!(game.state().col(), 0);
        assert_eq!(game.state().row(), 0);
    }

    #[test]
    fn incomplete_guess_leaves_state_unchanged() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Easy, "apple");

        let result = guess(&mut game, "bea");
        assert_eq!(
            result,
            Err(GameError::IncompleteGuess {
                len: 3,
                expected: 5
            })
        );
        assert_eq!(game.state().row(), 0);
        assert_eq!(game.state().current_input(), "bea");
        assert!(game.hints().iter().next().is_none());
    }

    #[test]
    fn unknown_word_keeps_letters_for_editing() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Easy, "apple");

        let result = guess(&mut game, "zzzzz");
        assert_eq!(result, Err(GameError::UnknownWord("zzzzz".to_string())));
        assert_eq!(game.state().row(), 0);
        assert_eq!(game.state().col(), 5);
        assert!(game.state().guesses().is_empty());

        game.delete_letter();
        type_word(&mut game, "x");
        assert_eq!(game.state().current_input(), "zzzzx");
    }

    #[test]
    fn bonus_words_are_accepted_as_guesses() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Easy, "apple");

        assert!(guess(&mut game, "steam").is_ok());
        assert_eq!(game.state().row(), 1);
    }

    #[test]
    fn wrong_guess_advances_row_and_updates_hints() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Easy, "apple");

        let result = guess(&mut game, "eagle").unwrap();
        assert_eq!(result.verdicts(), &[Absent, Present, Absent, Correct, Correct]);
        assert_eq!(game.state().row(), 1);
        assert_eq!(game.state().col(), 0);
        assert_eq!(game.hints().get('e'), Some(Correct));
        assert_eq!(game.hints().get('g'), Some(Absent));
        assert!(!game.state().is_over());
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Hard, "ivory");

        for word in ["adieu", "rhino", "glyph"] {
            guess(&mut game, word).unwrap();
        }
        assert_eq!(game.state().row(), 3);

        let result = guess(&mut game, "ivory").unwrap();
        assert!(result.is_win());
        assert_eq!(game.state().status(), GameStatus::Won);
        assert_eq!(game.state().row(), 3);
    }

    #[test]
    fn running_out_of_rows_loses() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Hard, "ivory");

        for word in ["adieu", "rhino", "glyph", "banal"] {
            guess(&mut game, word).unwrap();
        }

        assert_eq!(game.state().status(), GameStatus::Lost);
        assert!(game.state().is_over());
        assert!(!game.state().is_won());
        assert_eq!(game.state().row(), 4);
    }

    #[test]
    fn inputs_after_game_over_change_nothing() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Hard, "ivory");
        guess(&mut game, "ivory").unwrap();

        let before = game.snapshot();
        game.add_letter('a').unwrap();
        game.delete_letter();
        assert_eq!(game.submit_guess(), Err(GameError::GameOver));

        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn new_game_clears_everything() {
        let lexicon = Lexicon::embedded();
        let mut game = game(&lexicon, Difficulty::Medium, "irony");

        guess(&mut game, "orbit").unwrap();
        type_word(&mut game, "ab");
        game.new_game();

        assert_eq!(game.state().row(), 0);
        assert_eq!(game.state().col(), 0);
        assert!(game.state().guesses().is_empty());
        assert!(game.hints().iter().next().is_none());
        assert_eq!(game.profile().level, Difficulty::Medium);
    }

    #[test]
    fn apply_level_draws_from_new_pool() {
        let lexicon = Lexicon::embedded();
        let mut game = Game::new(&lexicon, Difficulty::Easy, RandomPicker::seeded(1)).unwrap();
        type_word(&mut game, "bea");

        for _ in 0..20 {
            game.apply_level(Difficulty::Hard).unwrap();
            let hard = lexicon.pool_for(Difficulty::Hard).unwrap();

            assert!(hard.contains(game.state().target()));
            assert_eq!(game.state().row(), 0);
            assert_eq!(game.state().col(), 0);
            assert_eq!(game.profile().max_guesses, 4);
        }
    }

    #[test]
    fn failed_level_switch_keeps_current_game() {
        let pool = vec![Word::new("ivory").unwrap()];
        let lexicon = Lexicon::new([(Difficulty::Hard, pool)], Vec::new()).unwrap();
        let mut game = game(&lexicon, Difficulty::Hard, "ivory");
        type_word(&mut game, "iv");

        let result = game.reset(Difficulty::Easy);
        assert!(matches!(result, Err(GameError::Config(_))));
        assert_eq!(game.profile().level, Difficulty::Hard);
        assert_eq!(game.state().current_input(), "iv");
    }
}
