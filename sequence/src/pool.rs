use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Card, ALL_CARDS, NUM_CARDS};

/// The cards that can be drawn: two full decks merged together, so every
/// identity is in here twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// Both decks, one after the other, each in the order of [`ALL_CARDS`].
    pub fn two_decks() -> Self {
        let mut cards = Vec::with_capacity(2 * NUM_CARDS);
        cards.extend_from_slice(&ALL_CARDS);
        cards.extend_from_slice(&ALL_CARDS);
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// How many copies of `card` are in the pool.
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Picks a card at a uniformly random index. The card stays in the pool,
    /// so it can be drawn again later.
    ///
    /// Returns `None` if the pool is empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Card> {
        self.cards.choose(rng).copied()
    }
}

impl Default for CardPool {
    fn default() -> Self {
        Self::two_decks()
    }
}
