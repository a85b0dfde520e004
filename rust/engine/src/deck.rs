use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};

/// Ordered draw pile. Dealing always takes from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Result of [`deal_cards`]: the dealt group and what is left over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub dealt: Vec<Card>,
    pub remaining: Deck,
}

impl Deal {
    /// True when the deck could not supply every requested card.
    pub fn is_short(&self, requested: usize) -> bool {
        self.dealt.len() < requested
    }
}

impl Deck {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// All 52 cards in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Builds a fresh 52-card deck and applies a full random permutation.
///
/// ```
/// use kems_engine::deck::create_deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// assert_eq!(create_deck(&mut rng).len(), 52);
/// ```
pub fn create_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    Deck::shuffled(rng)
}

/// Splits off the first `count` cards without touching `deck`.
///
/// Asking for more cards than the deck holds is not an error: `dealt` comes
/// back shorter than requested and the caller checks its length.
///
/// ```
/// use kems_engine::cards::full_deck;
/// use kems_engine::deck::{deal_cards, Deck};
///
/// let deck = Deck::from_cards(full_deck()[..2].to_vec());
/// let deal = deal_cards(&deck, 4);
/// assert_eq!(deal.dealt.len(), 2);
/// assert!(deal.remaining.is_empty());
/// assert_eq!(deck.len(), 2);
/// ```
pub fn deal_cards(deck: &Deck, count: usize) -> Deal {
    let split = count.min(deck.cards.len());
    Deal {
        dealt: deck.cards[..split].to_vec(),
        remaining: Deck::from_cards(deck.cards[split..].to_vec()),
    }
}
