//! Hand of letter tiles
//!
//! A Hand is a multiset of letters: each letter maps to how many copies are
//! still available to play.

use rustc_hash::FxHashMap;
use std::fmt;

/// The letters a player can still use, as letter -> remaining count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    counts: FxHashMap<u8, u32>,
}

/// Error type for consuming letters the hand does not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    MissingLetter {
        letter: u8,
        needed: u32,
        available: u32,
    },
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLetter {
                letter,
                needed,
                available,
            } => write!(
                f,
                "Hand holds {available} of '{}' but the word needs {needed}",
                *letter as char
            ),
        }
    }
}

impl std::error::Error for HandError {}

impl Hand {
    /// Create an empty hand
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand holding one tile per byte of `letters`
    ///
    /// # Examples
    /// ```
    /// use word_hand::core::Hand;
    ///
    /// let hand = Hand::from_letters("hello");
    /// assert_eq!(hand.count(b'l'), 2);
    /// assert_eq!(hand.remaining_count(), 5);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut hand = Self::new();
        for &letter in letters.as_bytes() {
            hand.add(letter);
        }
        hand
    }

    /// Add one tile of `letter`
    pub fn add(&mut self, letter: u8) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }

    /// How many tiles of `letter` remain
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of tiles still in the hand
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }

    /// Whether every tile has been played
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Remove the letters of `word` from a copy of this hand
    ///
    /// The hand itself is left untouched.
    ///
    /// # Errors
    /// Returns `HandError::MissingLetter` if `word` uses a letter more times
    /// than the hand holds it.
    ///
    /// # Examples
    /// ```
    /// use word_hand::core::Hand;
    ///
    /// let hand = Hand::from_letters("catdogs");
    /// let rest = hand.consume("cat").unwrap();
    /// assert_eq!(rest.remaining_count(), 4);
    /// assert_eq!(hand.remaining_count(), 7);
    ///
    /// assert!(rest.consume("cat").is_err());
    /// ```
    pub fn consume(&self, word: &str) -> Result<Self, HandError> {
        let mut updated = self.clone();
        for &letter in word.as_bytes() {
            let available = updated.count(letter);
            if available == 0 {
                let needed = word.bytes().filter(|&b| b == letter).count() as u32;
                return Err(HandError::MissingLetter {
                    letter,
                    needed,
                    available: self.count(letter),
                });
            }
            if available == 1 {
                updated.counts.remove(&letter);
            } else {
                updated.counts.insert(letter, available - 1);
            }
        }
        Ok(updated)
    }

    /// All remaining tiles in alphabetical order, repeated per count
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        let mut present: Vec<(u8, u32)> = self
            .counts
            .iter()
            .filter(|&(_, &c)| c > 0)
            .map(|(&l, &c)| (l, c))
            .collect();
        present.sort_unstable_by_key(|&(l, _)| l);

        present
            .into_iter()
            .flat_map(|(l, c)| std::iter::repeat_n(l, c as usize))
            .collect()
    }

    /// Snapshot of the live letter counts, zero counts dropped
    pub(crate) fn counts(&self) -> FxHashMap<u8, u32> {
        self.counts
            .iter()
            .filter(|&(_, &c)| c > 0)
            .map(|(&l, &c)| (l, c))
            .collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self.letters();
        for (i, &letter) in letters.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
