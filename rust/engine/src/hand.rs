use crate::cards::{Card, Rank};

/// Number of cards in a hand and on the table.
pub const HAND_SIZE: usize = 4;

/// Tally of how often each rank occurs, indexed by rank value (1..=13).
pub fn rank_counts(cards: &[Card]) -> [usize; 14] {
    let mut counts = [0usize; 14];
    for c in cards {
        counts[c.rank.value() as usize] += 1;
    }
    counts
}

/// Ranks present in `cards` with their counts, ascending by rank.
pub fn ranks_by_count(cards: &[Card]) -> Vec<(Rank, usize)> {
    let counts = rank_counts(cards);
    (1..=13u8)
        .filter(|&v| counts[v as usize] > 0)
        .filter_map(|v| Rank::from_u8(v).map(|r| (r, counts[v as usize])))
        .collect()
}

/// True iff some rank occurs exactly four times.
///
/// With a four-card hand that means every card shares one rank. Three of a
/// kind is not reported.
///
/// ```
/// use kems_engine::cards::{Card, Rank, Suit};
/// use kems_engine::hand::check_winning_hand;
///
/// let quads = [
///     Card::new(Rank::Five, Suit::Spades),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Diamonds),
///     Card::new(Rank::Five, Suit::Clubs),
/// ];
/// assert!(check_winning_hand(&quads));
/// assert!(!check_winning_hand(&quads[..3]));
/// ```
pub fn check_winning_hand(hand: &[Card]) -> bool {
    rank_counts(hand).iter().any(|&n| n == 4)
}
