//! Letter tables
//!
//! The alphabet split used when dealing, and the per-letter point values used
//! when scoring.

use std::fmt;

/// Vowels dealt into the guaranteed third of every hand
pub const VOWELS: &[u8; 5] = b"aeiou";

/// The 21 consonants dealt into the rest of a hand
pub const CONSONANTS: &[u8; 21] = b"bcdfghjklmnpqrstvwxyz";

/// Scrabble point values for `a` through `z`
pub const SCRABBLE_VALUES: [u32; 26] = [
    1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
];

/// Check whether a byte is one of the vowels
#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.contains(&letter)
}

/// Per-letter point weights for the 26 lowercase letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterValues([u32; 26]);

/// Error type for an invalid letter value table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterValuesError {
    /// A letter was given a value of zero
    ZeroValue(u8),
}

impl fmt::Display for LetterValuesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroValue(letter) => {
                write!(f, "Letter '{}' must be worth at least one point", *letter as char)
            }
        }
    }
}

impl std::error::Error for LetterValuesError {}

impl LetterValues {
    /// Build a table from 26 values, `a` first
    ///
    /// # Errors
    /// Returns `LetterValuesError::ZeroValue` if any letter is worth nothing.
    ///
    /// # Examples
    /// ```
    /// use word_hand::core::LetterValues;
    ///
    /// let flat = LetterValues::new([1; 26]).unwrap();
    /// assert_eq!(flat.value(b'q'), Some(1));
    ///
    /// assert!(LetterValues::new([0; 26]).is_err());
    /// ```
    pub fn new(values: [u32; 26]) -> Result<Self, LetterValuesError> {
        if let Some(pos) = values.iter().position(|&v| v == 0) {
            return Err(LetterValuesError::ZeroValue(b'a' + pos as u8));
        }
        Ok(Self(values))
    }

    /// Point value of a letter, or `None` outside `a..=z`
    #[inline]
    #[must_use]
    pub fn value(&self, letter: u8) -> Option<u32> {
        letter
            .is_ascii_lowercase()
            .then(|| self.0[usize::from(letter - b'a')])
    }
}

impl Default for LetterValues {
    fn default() -> Self {
        Self(SCRABBLE_VALUES)
    }
}
