//! In-memory dictionary of playable words

use rustc_hash::FxHashSet;

/// Set of lowercase words, queried for membership
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already-normalized words
    ///
    /// # Examples
    /// ```
    /// use word_hand::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "dog", "cat"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("dog"));
    /// assert!(!dictionary.contains("Dog"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `word` is playable
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) fn as_set(&self) -> &FxHashSet<String> {
        &self.words
    }
}
