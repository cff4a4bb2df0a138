//! Formatting utilities for terminal output

use crate::core::BONUS;

/// "1 point" / "2 points"
#[must_use]
pub fn points(value: u32) -> String {
    if value == 1 {
        "1 point".to_string()
    } else {
        format!("{value} points")
    }
}

/// Show how a score was built, e.g. `(5 × 3) + 50 bonus`
#[must_use]
pub fn score_breakdown(letter_sum: u32, length: usize, bonus: bool) -> String {
    if bonus {
        format!("({letter_sum} × {length}) + {BONUS} bonus")
    } else {
        format!("{letter_sum} × {length}")
    }
}

/// Render a hand's letters as a row of tiles, e.g. `[C][A][T]`
#[must_use]
pub fn tiles(letters: &[u8]) -> String {
    letters
        .iter()
        .map(|&l| format!("[{}]", l.to_ascii_uppercase() as char))
        .collect()
}
