//! Target selection strategies
//!
//! The game never touches a global RNG directly; it asks a `TargetPicker`.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A strategy for choosing the hidden target from a pool
pub trait TargetPicker {
    /// Choose a target from `pool`
    ///
    /// `pool` is never empty: `DifficultyProfile` only hands out non-empty pools.
    fn pick<'a>(&mut self, pool: &'a [Word]) -> &'a Word;
}

/// Uniformly random picker
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from the thread-local RNG
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Picker with a fixed seed, for reproducible games
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetPicker for RandomPicker {
    fn pick<'a>(&mut self, pool: &'a [Word]) -> &'a Word {
        &pool[self.rng.random_range(0..pool.len())]
    }
}

/// Always picks the same word
///
/// Falls back to the first word of the pool when the fixed word isn't in it.
pub struct FixedPicker {
    word: String,
}

impl FixedPicker {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_lowercase(),
        }
    }
}

impl TargetPicker for FixedPicker {
    fn pick<'a>(&mut self, pool: &'a [Word]) -> &'a Word {
        pool.iter()
            .find(|w| w.text() == self.word)
            .unwrap_or_else(|| {
                tracing::warn!(word = %self.word, "fixed target not in pool, using first word");
                &pool[0]
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;

    fn pool() -> Vec<Word> {
        words_from_slice(&["adieu", "banal", "cacao", "ivory", "rhino"])
    }

    #[test]
    fn random_picker_stays_in_pool() {
        let pool = pool();
        let mut picker = RandomPicker::new();

        for _ in 0..50 {
            let target = picker.pick(&pool);
            assert!(pool.contains(target));
        }
    }

    #[test]
    fn seeded_pickers_agree() {
        let pool = pool();
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);

        for _ in 0..20 {
            assert_eq!(a.pick(&pool), b.pick(&pool));
        }
    }

    #[test]
    fn random_picker_reaches_every_word() {
        let pool = pool();
        let mut picker = RandomPicker::seeded(7);
        let mut seen = vec![false; pool.len()];

        for _ in 0..500 {
            let target = picker.pick(&pool);
            let index = pool.iter().position(|w| w == target).unwrap();
            seen[index] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn fixed_picker_returns_word() {
        let pool = pool();
        let mut picker = FixedPicker::new("IVORY");
        assert_eq!(picker.pick(&pool).text(), "ivory");
    }

    #[test]
    fn fixed_picker_falls_back_to_first() {
        let pool = pool();
        let mut picker = FixedPicker::new("apple");
        assert_eq!(picker.pick(&pool).text(), "adieu");
    }
}
