//! Baseline AI implementation for KEMS.
//!
//! Picks one rank to collect and, each turn, takes the first table card of
//! that rank in exchange for the first hand card that is not of it. No
//! lookahead and no re-targeting mid-round.

use crate::AIOpponent;
use kems_engine::cards::{Card, Rank};
use kems_engine::hand::ranks_by_count;
use kems_engine::opponent::AiMove;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use tracing::debug;

/// Rank the AI should collect.
///
/// The first rank held at least twice wins, scanning ranks in ascending
/// order (so `[9, 9, 5, 5]` targets 5). With no repeated rank, a card is
/// picked uniformly at random and its rank used. `None` only for an empty
/// hand.
///
/// # Example
///
/// ```rust
/// use kems_ai::baseline::determine_target_rank;
/// use kems_engine::cards::{Card, Rank, Suit};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let hand = [
///     Card::new(Rank::Five, Suit::Spades),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Diamonds),
///     Card::new(Rank::Seven, Suit::Clubs),
/// ];
/// let mut rng = ChaCha20Rng::seed_from_u64(1);
/// assert_eq!(determine_target_rank(&hand, &mut rng), Some(Rank::Five));
/// ```
pub fn determine_target_rank<R: Rng + ?Sized>(hand: &[Card], rng: &mut R) -> Option<Rank> {
    if let Some((rank, _)) = ranks_by_count(hand).into_iter().find(|&(_, n)| n >= 2) {
        return Some(rank);
    }
    hand.choose(rng).map(|card| card.rank)
}

/// One greedy step toward `target_rank`.
///
/// Returns the first table slot holding `target_rank` paired with the first
/// hand slot that does not. `None` when the table has no such card, or when
/// every hand card already has the target rank.
///
/// # Example
///
/// ```rust
/// use kems_ai::baseline::get_ai_move;
/// use kems_engine::cards::{Card, Rank, Suit};
///
/// let hand = [
///     Card::new(Rank::Five, Suit::Spades),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Three, Suit::Diamonds),
///     Card::new(Rank::Seven, Suit::Clubs),
/// ];
/// let table = [
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Diamonds),
///     Card::new(Rank::Nine, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
/// ];
/// let mv = get_ai_move(&hand, &table, Rank::Five).unwrap();
/// assert_eq!((mv.table_index, mv.hand_index), (1, 2));
/// ```
pub fn get_ai_move(ai_hand: &[Card], table: &[Card], target_rank: Rank) -> Option<AiMove> {
    let table_index = table.iter().position(|c| c.rank == target_rank)?;
    let hand_index = ai_hand.iter().position(|c| c.rank != target_rank)?;
    Some(AiMove {
        table_index,
        hand_index,
    })
}

/// Greedy target-rank collector.
///
/// # Example
///
/// ```rust
/// use kems_ai::baseline::BaselineAI;
/// use kems_ai::AIOpponent;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

impl AIOpponent for BaselineAI {
    fn choose_target(&self, hand: &[Card], rng: &mut dyn RngCore) -> Option<Rank> {
        let rank = determine_target_rank(hand, rng)?;
        debug!(target = rank.value(), "baseline target chosen");
        Some(rank)
    }

    fn choose_move(&self, hand: &[Card], table: &[Card], target: Rank) -> Option<AiMove> {
        get_ai_move(hand, table, target)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
