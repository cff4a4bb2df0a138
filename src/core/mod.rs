//! Core domain types for the hand game
//!
//! Letter tables, the Hand multiset and scoring. Everything here is pure and
//! free of I/O.

mod hand;
mod letters;
mod scoring;

pub use hand::{Hand, HandError};
pub use letters::{
    CONSONANTS, LetterValues, LetterValuesError, SCRABBLE_VALUES, VOWELS, is_vowel,
};
pub use scoring::{BONUS, word_score};
