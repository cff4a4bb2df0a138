//! Word Hand
//!
//! A word-tile game: letters are dealt into a hand, the player spells
//! dictionary words from them, and each word scores its letter values times
//! its length, with a bonus for using the whole hand at once.
//!
//! # Quick Start
//!
//! ```rust
//! use word_hand::core::{Hand, word_score};
//! use word_hand::game::is_valid_word;
//! use word_hand::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["cat", "dog"]);
//! let hand = Hand::from_letters("catdogs");
//!
//! assert!(is_valid_word("cat", &hand, &dictionary));
//! assert_eq!(word_score("cat", 15), 15);
//!
//! let rest = hand.consume("cat").unwrap();
//! assert_eq!(rest.to_string(), "d g o s");
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod config;

// Dealing and validation rules
pub mod game;

// Dictionary search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive text-mode play
pub mod interactive;
