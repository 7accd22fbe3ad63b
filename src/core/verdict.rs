//! Guess scoring
//!
//! A guess is scored position by position against the target:
//! - Correct: right letter in the right position
//! - Present: letter is in the target, but elsewhere
//! - Absent: letter is not in the target (or all its occurrences are used up)

use super::Word;
use super::word::WORD_LENGTH;

/// Per-position scoring outcome
///
/// Ordered by how much it tells the player: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterVerdict {
    Absent,
    Present,
    Correct,
}

impl LetterVerdict {
    /// Emoji tile for this verdict
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for one guess, in letter order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessResult([LetterVerdict; WORD_LENGTH]);

impl GuessResult {
    /// Build a result from raw verdicts
    #[must_use]
    pub const fn new(verdicts: [LetterVerdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `target`
    ///
    /// Duplicate letters are handled in two passes:
    /// 1. Exact matches are marked Correct and consume one occurrence of the letter
    /// 2. Left to right, remaining letters are Present while unconsumed occurrences remain
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{GuessResult, LetterVerdict::*, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let target = Word::new("speed").unwrap();
    ///
    /// // Only two E's can light up, because SPEED has two
    /// let result = GuessResult::score(&guess, &target);
    /// assert_eq!(result.verdicts(), &[Present, Absent, Absent, Present, Present]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut verdicts = [LetterVerdict::Absent; WORD_LENGTH];
        let mut remaining = target.char_counts();

        // First pass: exact positions
        for (i, (g, t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                verdicts[i] = LetterVerdict::Correct;
                if let Some(count) = remaining.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, bounded by what's left
        for (i, letter) in guess.chars().iter().enumerate() {
            if verdicts[i] == LetterVerdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(letter)
                && *count > 0
            {
                verdicts[i] = LetterVerdict::Present;
                *count -= 1;
            }
        }

        Self(verdicts)
    }

    /// Verdicts in letter order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&v| v == LetterVerdict::Correct)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}
