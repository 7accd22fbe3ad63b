//! Score one guess against a target

use crate::core::{GuessResult, Word, WordError};

/// Result of scoring a single guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub result: GuessResult,
}

/// Score `guess` against `target`
///
/// Both must be 5-letter words; neither has to be in the dictionary.
///
/// # Errors
///
/// Returns `WordError` if either word is malformed.
///
/// # Examples
/// ```
/// use wordle_game::commands::score_words;
///
/// let score = score_words("Rhino", "ivory").unwrap();
/// assert_eq!(score.result.to_emoji(), "🟨⬜🟨⬜🟨");
/// ```
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let result = GuessResult::score(&guess, &target);

    Ok(ScoreResult {
        guess,
        target,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_words_valid() {
        let score = score_words("adieu", "ivory").unwrap();
        assert_eq!(score.guess.text(), "adieu");
        assert_eq!(score.target.text(), "ivory");
        assert_eq!(score.result.to_emoji(), "⬜⬜🟨⬜⬜");
    }

    #[test]
    fn score_words_rejects_malformed() {
        assert_eq!(
            score_words("adieux", "ivory").unwrap_err(),
            WordError::InvalidLength(6)
        );
        assert!(score_words("adieu", "iv0ry").is_err());
    }
}
