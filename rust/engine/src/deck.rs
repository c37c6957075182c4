use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::cards::{full_deck, Card};
use crate::hand::{Hand, HAND_SIZE};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// A 52-card deck with a seeded ChaCha20 RNG, so the same seed always deals
/// the same hands.
///
/// # Examples
///
/// ```
/// use fivecard_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.deal_hand(), b.deal_hand());
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    seed: u64,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new(seed: Option<u64>) -> Self {
        Self::new_with_seed(seed.unwrap_or(DEFAULT_SEED))
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep deck order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            seed,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
        debug!(seed = self.seed, "shuffled deck");
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Deals the next five cards as a hand, or `None` when fewer than five
    /// remain. Nothing is dealt in that case.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.remaining() < HAND_SIZE {
            return None;
        }
        let start = self.position;
        self.position += HAND_SIZE;
        Hand::new(&self.cards[start..self.position]).ok()
    }

    /// Partitions the remaining cards into as many complete hands as fit.
    pub fn deal_hands(&mut self) -> Vec<Hand> {
        std::iter::from_fn(|| self.deal_hand()).collect()
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(None)
    }
}
