use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::deck::{create_deck, deal_cards, Deck};
use crate::hand::{check_winning_hand, HAND_SIZE};

/// Where a game stands. `PlayerWin` and `AiWin` are terminal; `AiWinPending`
/// holds while the AI's winning hand is shown before the loss is declared.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Playing,
    PlayerWin,
    AiWinPending,
    AiWin,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::PlayerWin | GameStatus::AiWin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::PlayerWin => "player-win",
            GameStatus::AiWinPending => "ai-win-pending",
            GameStatus::AiWin => "ai-win",
        }
    }
}

/// In-progress player swap gesture: at most one hand slot and one table slot.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub hand: Option<usize>,
    pub table: Option<usize>,
}

/// Every piece of state one game owns. A new game or a new round replaces
/// the pieces it touches rather than patching them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    deck: Deck,
    player_hand: Vec<Card>,
    ai_hand: Vec<Card>,
    table: Vec<Card>,
    recycled: Vec<Card>,
    selection: Selection,
    status: GameStatus,
    turn_count: u32,
    round: u32,
    target_rank: Option<Rank>,
}

impl GameState {
    /// Shuffles a fresh deck and deals player, AI and table in that order.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let deck = create_deck(rng);
        let player = deal_cards(&deck, HAND_SIZE);
        let ai = deal_cards(&player.remaining, HAND_SIZE);
        let table = deal_cards(&ai.remaining, HAND_SIZE);
        Self::from_parts(
            table.remaining,
            player.dealt,
            ai.dealt,
            table.dealt,
            Vec::new(),
        )
    }

    /// Assembles a position from explicit piles, status `Playing`, no
    /// target rank. Used to restore or stage specific positions.
    pub fn from_parts(
        deck: Deck,
        player_hand: Vec<Card>,
        ai_hand: Vec<Card>,
        table: Vec<Card>,
        recycled: Vec<Card>,
    ) -> Self {
        Self {
            deck,
            player_hand,
            ai_hand,
            table,
            recycled,
            selection: Selection::default(),
            status: GameStatus::Playing,
            turn_count: 0,
            round: 1,
            target_rank: None,
        }
    }

    pub fn with_target_rank(mut self, rank: Rank) -> Self {
        self.target_rank = Some(rank);
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }
    pub fn ai_hand(&self) -> &[Card] {
        &self.ai_hand
    }
    pub fn table(&self) -> &[Card] {
        &self.table
    }
    pub fn recycled(&self) -> &[Card] {
        &self.recycled
    }
    pub fn selection(&self) -> Selection {
        self.selection
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn target_rank(&self) -> Option<Rank> {
        self.target_rank
    }

    /// Total cards across deck, both hands, table and recycle pile.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.player_hand.len()
            + self.ai_hand.len()
            + self.table.len()
            + self.recycled.len()
    }

    pub(crate) fn set_target_rank(&mut self, rank: Rank) {
        self.target_rank = Some(rank);
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection = Selection::default();
    }

    pub(crate) fn bump_turn(&mut self) {
        self.turn_count += 1;
    }

    /// Exchanges `player_hand[hand_index]` with `table[table_index]`,
    /// returning `(given, taken)` from the player's point of view.
    pub(crate) fn swap_player(&mut self, hand_index: usize, table_index: usize) -> (Card, Card) {
        swap_with_table(&mut self.player_hand, &mut self.table, hand_index, table_index)
    }

    pub(crate) fn swap_ai(&mut self, hand_index: usize, table_index: usize) -> (Card, Card) {
        swap_with_table(&mut self.ai_hand, &mut self.table, hand_index, table_index)
    }

    /// Moves the table onto the recycle pile and deals a fresh table.
    ///
    /// When the deck cannot cover a full table, the recycle pile, the short
    /// deal and whatever else the deck held are shuffled into a new deck and
    /// the table is dealt from that; the recycle pile starts over empty.
    /// Returns whether that reshuffle happened.
    pub(crate) fn replace_table<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let displaced = std::mem::take(&mut self.table);
        self.recycled.extend(displaced);
        self.round += 1;

        let deal = deal_cards(&self.deck, HAND_SIZE);
        if !deal.is_short(HAND_SIZE) {
            self.table = deal.dealt;
            self.deck = deal.remaining;
            return false;
        }

        let mut pool = std::mem::take(&mut self.recycled);
        pool.extend(deal.dealt);
        pool.extend(deal.remaining.into_cards());
        pool.shuffle(rng);
        let redeal = deal_cards(&Deck::from_cards(pool), HAND_SIZE);
        self.table = redeal.dealt;
        self.deck = redeal.remaining;
        true
    }

    /// Checks both hands for four of a kind, player first, and moves the
    /// status accordingly. Only runs while playing and with both hands fully
    /// dealt. Returns the new status when it changed.
    pub(crate) fn evaluate_win(&mut self) -> Option<GameStatus> {
        if self.status != GameStatus::Playing
            || self.player_hand.len() < HAND_SIZE
            || self.ai_hand.len() < HAND_SIZE
        {
            return None;
        }
        if check_winning_hand(&self.player_hand) {
            self.status = GameStatus::PlayerWin;
        } else if check_winning_hand(&self.ai_hand) {
            self.status = GameStatus::AiWinPending;
        } else {
            return None;
        }
        Some(self.status)
    }
}

fn swap_with_table(
    hand: &mut [Card],
    table: &mut [Card],
    hand_index: usize,
    table_index: usize,
) -> (Card, Card) {
    let given = hand[hand_index];
    let taken = table[table_index];
    hand[hand_index] = taken;
    table[table_index] = given;
    (given, taken)
}

/// Read-only view of a game for presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player_hand: Vec<Card>,
    pub ai_hand: Vec<Card>,
    /// The AI hand stays hidden until the AI's win is revealed.
    pub ai_face_down: bool,
    pub table: Vec<Card>,
    pub turn_count: u32,
    pub round: u32,
    pub deck_remaining: usize,
    pub recycled: usize,
    pub status: GameStatus,
    pub selection: Selection,
    /// A card mutation is scheduled and has not fired yet.
    pub busy: bool,
}

impl GameSnapshot {
    pub(crate) fn of(state: &GameState, busy: bool) -> Self {
        Self {
            player_hand: state.player_hand.clone(),
            ai_hand: state.ai_hand.clone(),
            ai_face_down: !matches!(state.status, GameStatus::AiWinPending | GameStatus::AiWin),
            table: state.table.clone(),
            turn_count: state.turn_count,
            round: state.round,
            deck_remaining: state.deck.len(),
            recycled: state.recycled.len(),
            status: state.status,
            selection: state.selection,
            busy,
        }
    }
}
