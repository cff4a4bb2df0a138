//! Word scoring command
//!
//! Scores a single word outside of play, showing how the total is built.

use crate::config::GameConfig;
use std::fmt;

/// Result of scoring a word
pub struct ScoreResult {
    pub word: String,
    pub letter_sum: u32,
    pub length: usize,
    pub bonus: bool,
    pub total: u32,
}

/// Error type for words that cannot be scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    Empty,
    InvalidLetter(char),
    TooLong(usize),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidLetter(c) => write!(f, "'{c}' is not a letter from a to z"),
            Self::TooLong(len) => write!(f, "A word of {len} letters scores too high to count"),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Lowercase `input` and check it only uses `a` through `z`
///
/// # Errors
///
/// Returns `ScoreError` for empty input or any character outside `a..=z`.
pub fn normalize_letters(input: &str) -> Result<String, ScoreError> {
    let word = input.trim().to_lowercase();
    if word.is_empty() {
        return Err(ScoreError::Empty);
    }
    if let Some(bad) = word.chars().find(|c| !c.is_ascii_lowercase()) {
        return Err(ScoreError::InvalidLetter(bad));
    }
    Ok(word)
}

/// Score `word` under `config`
///
/// Dictionary membership is not checked; any run of letters can be scored.
///
/// # Errors
///
/// Returns `ScoreError` if the word is empty, has non-letters, or scores
/// more than a `u32` can hold.
pub fn score_word(word: &str, config: &GameConfig) -> Result<ScoreResult, ScoreError> {
    let word = normalize_letters(word)?;
    let values = &config.letter_values;

    let length = word.len();
    let letter_sum = values
        .checked_letter_sum(&word)
        .ok_or(ScoreError::TooLong(length))?;
    let total = values
        .checked_word_score(&word, config.hand_size)
        .ok_or(ScoreError::TooLong(length))?;
    let bonus = length == config.hand_size;

    Ok(ScoreResult {
        word,
        letter_sum,
        length,
        bonus,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_cat() {
        let result = score_word("cat", &GameConfig::default()).unwrap();
        assert_eq!(result.word, "cat");
        assert_eq!(result.letter_sum, 5);
        assert_eq!(result.length, 3);
        assert!(!result.bonus);
        assert_eq!(result.total, 15);
    }

    #[test]
    fn score_with_bonus() {
        let config = GameConfig::default().with_hand_size(3);
        let result = score_word("CAT", &config).unwrap();
        assert_eq!(result.word, "cat");
        assert!(result.bonus);
        assert_eq!(result.total, 65);
    }

    #[test]
    fn rejects_non_letters() {
        let config = GameConfig::default();
        assert_eq!(
            score_word("c4t", &config).err(),
            Some(ScoreError::InvalidLetter('4'))
        );
        assert_eq!(
            score_word("no way", &config).err(),
            Some(ScoreError::InvalidLetter(' '))
        );
        assert_eq!(score_word("  ", &config).err(), Some(ScoreError::Empty));
    }

    #[test]
    fn rejects_word_too_long_to_score() {
        let word = "z".repeat(21_000);
        assert_eq!(
            score_word(&word, &GameConfig::default()).err(),
            Some(ScoreError::TooLong(21_000))
        );
    }

    #[test]
    fn rejects_non_ascii() {
        assert_eq!(
            normalize_letters("café"),
            Err(ScoreError::InvalidLetter('é'))
        );
    }
}
