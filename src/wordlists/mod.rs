//! Word lists for the hand game
//!
//! Loads the newline-delimited word list once at startup and holds it as a
//! set for membership checks.

mod dictionary;
pub mod loader;

pub use dictionary::Dictionary;

/// Word list read when no path is given on the command line
pub const DEFAULT_WORDLIST: &str = "words.txt";
