//! Word scoring
//!
//! A word is worth the sum of its letter values times its length, plus a flat
//! bonus for spending a whole fresh hand on one word.

use super::letters::LetterValues;

/// Bonus for a word whose length equals the hand size
pub const BONUS: u32 = 50;

impl LetterValues {
    /// Score `word` for a hand of size `hand_size`
    ///
    /// `word` must already be validated: letters outside `a..=z` trip a debug
    /// assertion and count as zero otherwise. A score too large for `u32`
    /// saturates at `u32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use word_hand::core::LetterValues;
    ///
    /// let values = LetterValues::default();
    /// assert_eq!(values.word_score("cat", 15), 15);
    /// assert_eq!(values.word_score("cat", 3), 65);
    /// ```
    #[must_use]
    pub fn word_score(&self, word: &str, hand_size: usize) -> u32 {
        self.checked_word_score(word, hand_size).unwrap_or(u32::MAX)
    }

    /// Score `word`, or `None` if the score does not fit in a `u32`
    ///
    /// # Examples
    /// ```
    /// use word_hand::core::LetterValues;
    ///
    /// let values = LetterValues::default();
    /// assert_eq!(values.checked_word_score("cat", 3), Some(65));
    /// assert_eq!(values.checked_word_score(&"z".repeat(21_000), 15), None);
    /// ```
    #[must_use]
    pub fn checked_word_score(&self, word: &str, hand_size: usize) -> Option<u32> {
        let letters = self.checked_letter_sum(word)?;
        let len = word.len();
        let base = letters.checked_mul(u32::try_from(len).ok()?)?;
        if len == hand_size {
            base.checked_add(BONUS)
        } else {
            Some(base)
        }
    }

    /// Sum of the letter values of `word`, or `None` on overflow
    #[must_use]
    pub fn checked_letter_sum(&self, word: &str) -> Option<u32> {
        word.bytes().try_fold(0u32, |sum, letter| {
            let value = self.value(letter);
            debug_assert!(value.is_some(), "unscored letter {letter:#x} in {word:?}");
            sum.checked_add(value.unwrap_or(0))
        })
    }
}

/// Score `word` with the standard Scrabble letter values
#[must_use]
pub fn word_score(word: &str, hand_size: usize) -> u32 {
    LetterValues::default().word_score(word, hand_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cat_without_bonus() {
        // (3 + 1 + 1) * 3
        assert_eq!(word_score("cat", 15), 15);
    }

    #[test]
    fn cat_with_bonus() {
        assert_eq!(word_score("cat", 3), 65);
    }

    #[test]
    fn heavy_letters() {
        // (10 + 1 + 3) * 3
        assert_eq!(word_score("zap", 7), 42);
        // (8 + 1 + 2) * 3
        assert_eq!(word_score("jad", 7), 33);
    }

    #[test]
    fn repeated_letters_count_each_time() {
        // (1 + 3 + 3 + 1 + 1) * 5
        assert_eq!(word_score("apple", 7), 45);
    }

    #[test]
    fn empty_word_scores_zero() {
        assert_eq!(word_score("", 7), 0);
    }

    #[test]
    fn bonus_only_on_exact_length() {
        let short = word_score("weed", 5);
        let exact = word_score("weeds", 5);
        // (4 + 1 + 1 + 2) * 4
        assert_eq!(short, 32);
        // (4 + 1 + 1 + 2 + 1) * 5 + 50
        assert_eq!(exact, 95);
    }

    #[test]
    fn custom_table() {
        let flat = LetterValues::new([2; 26]).unwrap();
        assert_eq!(flat.word_score("quiz", 10), 32);
        assert_eq!(flat.word_score("quiz", 4), 32 + BONUS);
    }

    #[test]
    fn long_word_saturates_instead_of_overflowing() {
        let word = "z".repeat(21_000);
        assert_eq!(word_score(&word, 15), u32::MAX);
        assert_eq!(LetterValues::default().checked_word_score(&word, 15), None);
    }

    #[test]
    fn bonus_overflow_is_detected() {
        let mut table = [1; 26];
        table[0] = u32::MAX - 10;
        let values = LetterValues::new(table).unwrap();

        assert_eq!(values.checked_word_score("a", 15), Some(u32::MAX - 10));
        assert_eq!(values.checked_word_score("a", 1), None);
        assert_eq!(values.word_score("a", 1), u32::MAX);
    }

    #[test]
    fn letter_sum_overflow_is_detected() {
        let values = LetterValues::new([u32::MAX / 2 + 1; 26]).unwrap();
        assert_eq!(values.checked_letter_sum("a"), Some(u32::MAX / 2 + 1));
        assert_eq!(values.checked_letter_sum("ab"), None);
    }

    #[test]
    fn matches_formula_for_every_letter() {
        let values = LetterValues::default();
        for letter in b'a'..=b'z' {
            let word = String::from_utf8(vec![letter; 2]).unwrap();
            let expected = values.value(letter).unwrap() * 2 * 2;
            assert_eq!(values.word_score(&word, 15), expected);
        }
    }
}
