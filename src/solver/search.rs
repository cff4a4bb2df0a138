//! Best-word search
//!
//! Scans the whole dictionary for the highest-scoring word a hand can spell.

use crate::core::{Hand, LetterValues};
use crate::game::is_valid_word;
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Find the highest-scoring playable word for `hand`
///
/// Returns the word and its score, or `None` if nothing in the dictionary can
/// be spelled. Ties go to the alphabetically first word.
///
/// # Examples
/// ```
/// use word_hand::core::{Hand, LetterValues};
/// use word_hand::solver::best_word;
/// use word_hand::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["cat", "act", "at", "zebra"]);
/// let hand = Hand::from_letters("tac");
///
/// let (word, score) = best_word(&hand, &dictionary, &LetterValues::default(), 3).unwrap();
/// assert_eq!(word, "act");
/// assert_eq!(score, 65);
/// ```
#[must_use]
pub fn best_word<'d>(
    hand: &Hand,
    dictionary: &'d Dictionary,
    values: &LetterValues,
    hand_size: usize,
) -> Option<(&'d str, u32)> {
    dictionary
        .as_set()
        .par_iter()
        .filter(|word| is_valid_word(word, hand, dictionary))
        .map(|word| (word.as_str(), values.word_score(word, hand_size)))
        .max_by(|a, b| compare_candidates(*a, *b))
}

/// Higher score wins, then the alphabetically earlier word
fn compare_candidates(a: (&str, u32), b: (&str, u32)) -> Ordering {
    a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0))
}
