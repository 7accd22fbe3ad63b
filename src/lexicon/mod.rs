//! Word pools and the guess dictionary
//!
//! Each difficulty level draws its targets from its own pool. Any word in any
//! pool, plus a list of bonus words, is a valid guess.

mod embedded;
pub mod loader;

pub use embedded::{BONUS, BONUS_COUNT, EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};

use crate::core::Word;
use crate::game::{Difficulty, GameError};
use loader::words_from_slice;
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-level target pools plus the set of words accepted as guesses
#[derive(Debug, Clone)]
pub struct Lexicon {
    pools: FxHashMap<Difficulty, Vec<Word>>,
    dictionary: FxHashSet<String>,
}

impl Lexicon {
    /// Lexicon built from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let pools = [
            (Difficulty::Easy, words_from_slice(EASY)),
            (Difficulty::Medium, words_from_slice(MEDIUM)),
            (Difficulty::Hard, words_from_slice(HARD)),
        ];
        Self::from_parts(pools, words_from_slice(BONUS))
    }

    /// Build a lexicon from custom pools and bonus guesses
    ///
    /// # Errors
    /// Returns `GameError::Config` if any pool is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::Difficulty;
    /// use wordle_game::lexicon::Lexicon;
    ///
    /// let pool = vec![Word::new("ivory").unwrap()];
    /// let lexicon = Lexicon::new([(Difficulty::Hard, pool)], vec![]).unwrap();
    ///
    /// assert!(lexicon.is_valid_guess("IVORY"));
    /// assert!(lexicon.pool_for(Difficulty::Easy).is_err());
    /// ```
    pub fn new(
        pools: impl IntoIterator<Item = (Difficulty, Vec<Word>)>,
        bonus: Vec<Word>,
    ) -> Result<Self, GameError> {
        let pools: Vec<_> = pools.into_iter().collect();

        if let Some((level, _)) = pools.iter().find(|(_, words)| words.is_empty()) {
            return Err(GameError::Config(format!("word pool for {level} is empty")));
        }

        Ok(Self::from_parts(pools, bonus))
    }

    fn from_parts(
        pools: impl IntoIterator<Item = (Difficulty, Vec<Word>)>,
        bonus: Vec<Word>,
    ) -> Self {
        let pools: FxHashMap<_, _> = pools.into_iter().collect();

        let dictionary = pools
            .values()
            .flatten()
            .chain(&bonus)
            .map(|w| w.text().to_string())
            .collect();

        Self { pools, dictionary }
    }

    /// Target pool for a level
    ///
    /// # Errors
    /// Returns `GameError::Config` if this lexicon has no pool for the level.
    pub fn pool_for(&self, level: Difficulty) -> Result<&[Word], GameError> {
        self.pools
            .get(&level)
            .map(Vec::as_slice)
            .ok_or_else(|| GameError::Config(format!("no word pool for level {level}")))
    }

    /// Check whether a word is accepted as a guess, ignoring case
    #[must_use]
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.dictionary.contains(&word.to_ascii_lowercase())
    }

    /// Accept extra words as guesses; they never become targets
    pub fn extend_dictionary(&mut self, words: impl IntoIterator<Item = Word>) {
        self.dictionary
            .extend(words.into_iter().map(|w| w.text().to_string()));
    }

    /// Number of distinct words accepted as guesses
    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}
