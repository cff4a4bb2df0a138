//! Game rules: dealing hands and validating plays

mod dealer;
mod validator;

pub use dealer::{Dealer, FixedDealer, RandomDealer, deal_hand};
pub use validator::is_valid_word;
