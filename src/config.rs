//! Game configuration

use crate::core::LetterValues;

/// Letters dealt per new hand unless configured otherwise
pub const HAND_SIZE: usize = 15;

/// Settings for one session of play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters dealt per new hand; also the word length that earns the bonus
    pub hand_size: usize,
    /// Point weight for each letter
    pub letter_values: LetterValues,
}

impl GameConfig {
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub const fn with_letter_values(mut self, letter_values: LetterValues) -> Self {
        self.letter_values = letter_values;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            letter_values: LetterValues::default(),
        }
    }
}
