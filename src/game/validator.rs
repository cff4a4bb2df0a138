//! Word validation
//!
//! A word is playable when the dictionary knows it and the hand holds enough
//! tiles to spell it.

use crate::core::Hand;
use crate::wordlists::Dictionary;

/// Check whether `word` can be played from `hand`
///
/// Works on a scratch copy of the hand's counts; `hand` is never modified.
///
/// # Examples
/// ```
/// use word_hand::core::Hand;
/// use word_hand::game::is_valid_word;
/// use word_hand::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["cat", "act", "tact"]);
/// let hand = Hand::from_letters("catx");
///
/// assert!(is_valid_word("act", &hand, &dictionary));
/// assert!(!is_valid_word("tact", &hand, &dictionary)); // needs two t's
/// assert!(!is_valid_word("tax", &hand, &dictionary)); // not a word
/// ```
#[must_use]
pub fn is_valid_word(word: &str, hand: &Hand, dictionary: &Dictionary) -> bool {
    if !dictionary.contains(word) {
        return false;
    }

    let mut scratch = hand.counts();
    for letter in word.bytes() {
        match scratch.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    true
}
