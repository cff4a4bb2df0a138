//! Single deal command
//!
//! Deals one hand without playing it.

use crate::core::{Hand, is_vowel};
use crate::game::Dealer;

/// A dealt hand with its vowel split
pub struct DealReport {
    pub hand: Hand,
    pub vowels: usize,
    pub consonants: usize,
}

/// Deal one hand of `n` letters from `dealer`
pub fn deal_once<D: Dealer>(dealer: &mut D, n: usize) -> DealReport {
    let hand = dealer.deal(n);
    let vowels = hand.letters().into_iter().filter(|&l| is_vowel(l)).count();
    let consonants = hand.remaining_count() - vowels;

    DealReport {
        hand,
        vowels,
        consonants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedDealer, RandomDealer};

    #[test]
    fn counts_vowels_and_consonants() {
        let report = deal_once(&mut FixedDealer::from_letters("catdogs"), 7);
        assert_eq!(report.vowels, 2);
        assert_eq!(report.consonants, 5);
    }

    #[test]
    fn random_deal_respects_vowel_floor() {
        let mut dealer = RandomDealer::seeded(11);
        for n in [0, 1, 3, 7, 15, 30] {
            let report = deal_once(&mut dealer, n);
            assert_eq!(report.hand.remaining_count(), n);
            assert!(report.vowels >= n / 3);
        }
    }
}
