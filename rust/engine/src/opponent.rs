use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// A proposed exchange: the table card at `table_index` goes into the hand
/// slot `hand_index`, and the hand card goes to the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AiMove {
    pub table_index: usize,
    pub hand_index: usize,
}

/// Decision-making seam for the computer-controlled hand.
///
/// The [`Engine`](crate::engine::Engine) asks for a target rank once when a
/// game starts and keeps it for every round of that game, then asks for a
/// move on every AI turn. Returning `None` from
/// [`choose_move`](AIOpponent::choose_move) is a pass.
///
/// # Example Implementation
///
/// ```rust
/// use kems_engine::cards::{Card, Rank};
/// use kems_engine::opponent::{AIOpponent, AiMove};
/// use rand::RngCore;
///
/// struct AlwaysPass;
///
/// impl AIOpponent for AlwaysPass {
///     fn choose_target(&self, hand: &[Card], _rng: &mut dyn RngCore) -> Option<Rank> {
///         hand.first().map(|c| c.rank)
///     }
///
///     fn choose_move(&self, _hand: &[Card], _table: &[Card], _target: Rank) -> Option<AiMove> {
///         None
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysPass"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Pick the rank to collect, given the freshly dealt (or staged) hand.
    /// `None` when the hand offers nothing to pick from.
    fn choose_target(&self, hand: &[Card], rng: &mut dyn RngCore) -> Option<Rank>;

    /// Propose one swap toward the target, or `None` to pass.
    fn choose_move(&self, hand: &[Card], table: &[Card], target: Rank) -> Option<AiMove>;

    /// Return the name/identifier of this AI implementation.
    fn name(&self) -> &str;
}
