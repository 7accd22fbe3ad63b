//! Read-only view of a game for renderers

use super::difficulty::{Difficulty, DifficultyProfile};
use super::state::GameState;
use crate::core::{GuessResult, KeyboardHints};

/// Everything a renderer needs after an operation, detached from the game
///
/// The target is only revealed once the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub level: Difficulty,
    pub row: usize,
    pub col: usize,
    pub word_length: usize,
    pub max_guesses: usize,
    pub over: bool,
    pub won: bool,
    pub target: Option<String>,
    pub current_input: String,
    pub guesses: Vec<(String, GuessResult)>,
    pub last_result: Option<GuessResult>,
    pub hints: KeyboardHints,
}

impl Snapshot {
    pub(crate) fn capture(
        profile: &DifficultyProfile<'_>,
        state: &GameState,
        hints: &KeyboardHints,
    ) -> Self {
        let over = state.is_over();

        Self {
            level: profile.level,
            row: state.row(),
            col: state.col(),
            word_length: profile.word_length,
            max_guesses: profile.max_guesses,
            over,
            won: state.is_won(),
            target: over.then(|| state.target().text().to_string()),
            current_input: state.current_input(),
            guesses: state
                .guesses()
                .iter()
                .map(|(word, result)| (word.text().to_string(), *result))
                .collect(),
            last_result: state.guesses().last().map(|&(_, result)| result),
            hints: *hints,
        }
    }

    /// Guess number shown to the player, 1-based and capped at the budget
    #[must_use]
    pub fn guess_number(&self) -> usize {
        (self.row + 1).min(self.max_guesses)
    }
}

#[cfg(test)]
mod tests {
    use crate::game::{Difficulty, FixedPicker, Game};
    use crate::lexicon::Lexicon;

    #[test]
    fn target_hidden_while_playing() {
        let lexicon = Lexicon::embedded();
        let game = Game::new(&lexicon, Difficulty::Easy, FixedPicker::new("apple")).unwrap();

        let snapshot = game.snapshot();
        assert_eq!(snapshot.target, None);
        assert!(!snapshot.over);
        assert_eq!(snapshot.last_result, None);
        assert_eq!(snapshot.guess_number(), 1);
    }

    #[test]
    fn target_revealed_when_over() {
        let lexicon = Lexicon::embedded();
        let mut game = Game::new(&lexicon, Difficulty::Easy, FixedPicker::new("apple")).unwrap();
        for ch in "apple".chars() {
            game.add_letter(ch).unwrap();
        }
        game.submit_guess().unwrap();

        let snapshot = game.snapshot();
        assert!(snapshot.over);
        assert!(snapshot.won);
        assert_eq!(snapshot.target.as_deref(), Some("apple"));
        assert_eq!(snapshot.guesses.len(), 1);
        assert!(snapshot.last_result.unwrap().is_win());
    }

    #[test]
    fn snapshot_is_detached() {
        let lexicon = Lexicon::embedded();
        let mut game = Game::new(&lexicon, Difficulty::Easy, FixedPicker::new("apple")).unwrap();

        let before = game.snapshot();
        game.add_letter('q').unwrap();

        assert_eq!(before.current_input, "");
        assert_eq!(game.snapshot().current_input, "q");
        assert_eq!(game.snapshot().col, 1);
    }
}
