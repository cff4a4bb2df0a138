//! Terminal output formatting
//!
//! Everything the game prints goes through here, written to any `Write`.

pub mod display;
pub mod formatters;

pub use display::{
    print_deal, print_hand, print_hand_summary, print_invalid_command, print_invalid_word,
    print_no_hand_yet, print_score_result, print_session_summary, print_suggestion,
    print_word_score,
};
