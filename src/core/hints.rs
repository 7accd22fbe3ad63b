//! Best-known verdict per letter, for colouring an on-screen keyboard

use super::{GuessResult, LetterVerdict, Word};

const ALPHABET: usize = 26;

/// Best verdict seen so far for each letter a-z
///
/// A letter's hint only ever moves up (`Absent < Present < Correct`). A guess
/// with duplicate letters can score one occurrence Absent and another Correct;
/// the Absent never erases what is already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardHints([Option<LetterVerdict>; ALPHABET]);

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every (letter, verdict) pair of a scored guess into the hints
    pub fn fold(&mut self, guess: &Word, result: &GuessResult) {
        for (&letter, &verdict) in guess.chars().iter().zip(result.verdicts()) {
            self.record(letter, verdict);
        }
    }

    /// Record one observation, returning true if the hint was upgraded
    ///
    /// Non-letters are ignored.
    pub fn record(&mut self, letter: u8, verdict: LetterVerdict) -> bool {
        let Some(slot) = Self::index(letter).map(|i| &mut self.0[i]) else {
            return false;
        };

        if slot.is_some_and(|known| known >= verdict) {
            return false;
        }
        *slot = Some(verdict);
        true
    }

    /// Hint for a letter, `None` if it hasn't been guessed yet
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterVerdict> {
        u8::try_from(letter)
            .ok()
            .and_then(Self::index)
            .and_then(|i| self.0[i])
    }

    /// Letters with a known hint, in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterVerdict)> + '_ {
        (b'a'..=b'z')
            .zip(self.0.iter())
            .filter_map(|(letter, hint)| hint.map(|v| (char::from(letter), v)))
    }

    pub fn clear(&mut self) {
        self.0 = [None; ALPHABET];
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_lowercase() - b'a'))
    }
}
