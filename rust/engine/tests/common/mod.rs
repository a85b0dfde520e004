#![allow(dead_code)]

use kems_engine::cards::{Card, Rank, Suit};
use kems_engine::opponent::{AIOpponent, AiMove};
use rand::RngCore;

pub fn c(rank: u8, suit: Suit) -> Card {
    Card::new(Rank::from_u8(rank).expect("rank in 1..=13"), suit)
}

pub fn quads(rank: u8) -> Vec<Card> {
    [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
        .iter()
        .map(|&s| c(rank, s))
        .collect()
}

/// Never swaps; targets its first card.
pub struct Passive;

impl AIOpponent for Passive {
    fn choose_target(&self, hand: &[Card], _rng: &mut dyn RngCore) -> Option<Rank> {
        hand.first().map(|c| c.rank)
    }

    fn choose_move(&self, _hand: &[Card], _table: &[Card], _target: Rank) -> Option<AiMove> {
        None
    }

    fn name(&self) -> &str {
        "Passive"
    }
}

/// Takes the first table card of the target rank for the first hand card
/// that is not of it.
pub struct Greedy;

impl AIOpponent for Greedy {
    fn choose_target(&self, hand: &[Card], _rng: &mut dyn RngCore) -> Option<Rank> {
        hand.first().map(|c| c.rank)
    }

    fn choose_move(&self, hand: &[Card], table: &[Card], target: Rank) -> Option<AiMove> {
        let table_index = table.iter().position(|c| c.rank == target)?;
        let hand_index = hand.iter().position(|c| c.rank != target)?;
        Some(AiMove {
            table_index,
            hand_index,
        })
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

/// Always proposes the same move, valid or not.
pub struct Fixed(pub AiMove);

impl AIOpponent for Fixed {
    fn choose_target(&self, hand: &[Card], _rng: &mut dyn RngCore) -> Option<Rank> {
        hand.first().map(|c| c.rank)
    }

    fn choose_move(&self, _hand: &[Card], _table: &[Card], _target: Rank) -> Option<AiMove> {
        Some(self.0)
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}
