//! Hand dealing
//!
//! A third of every hand (rounded down) is drawn from the vowels, the rest
//! from the consonants. Every draw is independent and with replacement.

use crate::core::{CONSONANTS, Hand, VOWELS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Deal a random hand of `n` letters
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_hand::game::deal_hand;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let hand = deal_hand(15, &mut rng);
/// assert_eq!(hand.remaining_count(), 15);
/// ```
pub fn deal_hand<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Hand {
    let vowels = n / 3;
    let mut hand = Hand::new();

    for _ in 0..vowels {
        hand.add(VOWELS[rng.random_range(0..VOWELS.len())]);
    }
    for _ in vowels..n {
        hand.add(CONSONANTS[rng.random_range(0..CONSONANTS.len())]);
    }

    hand
}

/// Source of fresh hands for a session
pub trait Dealer {
    /// Deal a hand of `n` letters
    fn deal(&mut self, n: usize) -> Hand;
}

/// Deals random hands from a seedable generator
pub struct RandomDealer {
    rng: StdRng,
}

impl RandomDealer {
    /// Dealer seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Dealer with a fixed seed, so games can be replayed exactly
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDealer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dealer for RandomDealer {
    fn deal(&mut self, n: usize) -> Hand {
        let hand = deal_hand(n, &mut self.rng);
        debug!(size = n, %hand, "dealt random hand");
        hand
    }
}

/// Deals the same letters every time
///
/// The requested size is ignored; the hand is exactly the letters given.
#[derive(Debug, Clone)]
pub struct FixedDealer {
    hand: Hand,
}

impl FixedDealer {
    #[must_use]
    pub fn new(hand: Hand) -> Self {
        Self { hand }
    }

    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        Self::new(Hand::from_letters(letters))
    }
}

impl Dealer for FixedDealer {
    fn deal(&mut self, _n: usize) -> Hand {
        debug!(hand = %self.hand, "dealt fixed hand");
        self.hand.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_vowel;

    fn vowel_count(hand: &Hand) -> usize {
        hand.letters().into_iter().filter(|&l| is_vowel(l)).count()
    }

    #[test]
    fn hand_has_requested_size() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 0..40 {
            assert_eq!(deal_hand(n, &mut rng).remaining_count(), n);
        }
    }

    #[test]
    fn at_least_a_third_vowels() {
        let mut rng = StdRng::seed_from_u64(2);
        for n in 0..40 {
            for _ in 0..25 {
                let hand = deal_hand(n, &mut rng);
                assert!(vowel_count(&hand) >= n / 3, "hand {hand} of size {n}");
            }
        }
    }

    #[test]
    fn exactly_a_third_vowels() {
        // Consonant draws never produce vowels, so the floor is also the count
        let mut rng = StdRng::seed_from_u64(3);
        let hand = deal_hand(15, &mut rng);
        assert_eq!(vowel_count(&hand), 5);
    }

    #[test]
    fn only_lowercase_letters() {
        let mut rng = StdRng::seed_from_u64(4);
        let hand = deal_hand(100, &mut rng);
        assert!(hand.letters().iter().all(u8::is_ascii_lowercase));
    }

    #[test]
    fn zero_size_hand_is_empty() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(deal_hand(0, &mut rng).is_empty());
    }

    #[test]
    fn seeded_dealers_agree() {
        let mut a = RandomDealer::seeded(42);
        let mut b = RandomDealer::seeded(42);
        for _ in 0..5 {
            assert_eq!(a.deal(15), b.deal(15));
        }
    }

    #[test]
    fn fixed_dealer_repeats_hand() {
        let mut dealer = FixedDealer::from_letters("catdogs");
        let first = dealer.deal(15);
        let second = dealer.deal(3);
        assert_eq!(first, Hand::from_letters("catdogs"));
        assert_eq!(first, second);
    }
}
