//! Best-word suggestion command
//!
//! Finds the highest-scoring dictionary word for a given set of letters.

use super::score::{ScoreError, normalize_letters};
use crate::config::GameConfig;
use crate::core::Hand;
use crate::solver::best_word;
use crate::wordlists::Dictionary;

/// Result of a suggestion
pub struct Suggestion {
    pub hand: Hand,
    pub best: Option<(String, u32)>,
}

/// Suggest the best word for `letters`
///
/// The bonus applies when the word uses `config.hand_size` letters.
///
/// # Errors
///
/// Returns `ScoreError` if `letters` is empty or has non-letters.
pub fn suggest_word(
    letters: &str,
    dictionary: &Dictionary,
    config: &GameConfig,
) -> Result<Suggestion, ScoreError> {
    let hand = Hand::from_letters(&normalize_letters(letters)?);
    let best = best_word(&hand, dictionary, &config.letter_values, config.hand_size)
        .map(|(word, score)| (word.to_string(), score));

    Ok(Suggestion { hand, best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_best_word() {
        let dictionary = Dictionary::from_words(["cat", "dogs", "catdogs"]);
        let config = GameConfig::default().with_hand_size(7);

        let suggestion = suggest_word("SGODTAC", &dictionary, &config).unwrap();
        assert_eq!(suggestion.hand, Hand::from_letters("catdogs"));
        assert_eq!(suggestion.best, Some(("catdogs".to_string(), 127)));
    }

    #[test]
    fn no_suggestion_for_unplayable_letters() {
        let dictionary = Dictionary::from_words(["cat"]);
        let suggestion = suggest_word("xyz", &dictionary, &GameConfig::default()).unwrap();
        assert!(suggestion.best.is_none());
    }

    #[test]
    fn invalid_letters_rejected() {
        let dictionary = Dictionary::from_words(["cat"]);
        assert!(suggest_word("c-t", &dictionary, &GameConfig::default()).is_err());
    }
}
