//! Command implementations

pub mod deal;
pub mod score;
pub mod suggest;

pub use deal::{DealReport, deal_once};
pub use score::{ScoreError, ScoreResult, normalize_letters, score_word};
pub use suggest::{Suggestion, suggest_word};
