//! Difficulty levels and the profile each one selects

use super::error::{GameError, Result};
use crate::core::{WORD_LENGTH, Word};
use crate::lexicon::Lexicon;
use std::fmt;
use std::str::FromStr;

/// Difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of guesses allowed at this level
    #[must_use]
    pub const fn max_guesses(self) -> usize {
        match self {
            Self::Easy => 6,
            Self::Medium => 5,
            Self::Hard => 4,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// The next level, wrapping from hard back to easy
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    /// Parse a level name, ignoring case
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Difficulty;
    ///
    /// assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
    /// assert!("expert".parse::<Difficulty>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::Config(format!("unknown difficulty level: {s}")))
    }
}

/// Configuration bundle for one game: which words can be targets and how
/// many guesses the player gets
#[derive(Debug, Clone, Copy)]
pub struct DifficultyProfile<'a> {
    pub level: Difficulty,
    pub word_length: usize,
    pub max_guesses: usize,
    pool: &'a [Word],
}

impl<'a> DifficultyProfile<'a> {
    /// Build the profile for `level` from the lexicon's pools
    ///
    /// # Errors
    /// Returns `GameError::Config` if the lexicon has no pool for the level.
    pub fn new(lexicon: &'a Lexicon, level: Difficulty) -> Result<Self> {
        let pool = lexicon.pool_for(level)?;

        Ok(Self {
            level,
            word_length: WORD_LENGTH,
            max_guesses: level.max_guesses(),
            pool,
        })
    }

    /// Candidate targets, never empty
    #[must_use]
    pub const fn pool(&self) -> &'a [Word] {
        self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_guesses_per_level() {
        assert_eq!(Difficulty::Easy.max_guesses(), 6);
        assert_eq!(Difficulty::Medium.max_guesses(), 5);
        assert_eq!(Difficulty::Hard.max_guesses(), 4);
    }

    #[test]
    fn parse_level_names() {
        for level in Difficulty::ALL {
            assert_eq!(level.name().parse::<Difficulty>(), Ok(level));
            assert_eq!(level.to_string().to_uppercase().parse::<Difficulty>(), Ok(level));
        }
    }

    #[test]
    fn parse_unknown_level_is_config_error() {
        assert!(matches!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::Config(_))
        ));
        assert!(matches!("".parse::<Difficulty>(), Err(GameError::Config(_))));
    }

    #[test]
    fn next_cycles_through_all_levels() {
        assert_eq!(Difficulty::Easy.next(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.next(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
    }

    #[test]
    fn profile_from_embedded_lexicon() {
        let lexicon = Lexicon::embedded();
        let profile = DifficultyProfile::new(&lexicon, Difficulty::Hard).unwrap();

        assert_eq!(profile.level, Difficulty::Hard);
        assert_eq!(profile.word_length, 5);
        assert_eq!(profile.max_guesses, 4);
        assert!(profile.pool().iter().any(|w| w.text() == "ivory"));
    }
}
