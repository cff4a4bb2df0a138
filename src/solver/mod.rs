//! Word search over the dictionary
//!
//! Finds the best play for a hand.

mod search;

pub use search::best_word;
