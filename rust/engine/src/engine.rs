use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};

use crate::cards::{Card, Rank};
use crate::errors::GameError;
use crate::game::{GameSnapshot, GameState, GameStatus, Selection};
use crate::logger::{Actor, GameRecord, MoveKind, MoveRecord};
use crate::opponent::{AIOpponent, AiMove};
use crate::scheduler::Scheduler;

/// Presentation delays applied before deferred mutations fire.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pacing {
    /// Pause before the AI resolves its turn after a deal.
    pub ai_turn: Duration,
    /// Pause between choosing a swap and the cards changing places.
    pub swap: Duration,
    /// How long the AI's winning hand is shown before the loss is declared.
    pub ai_win_reveal: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            ai_turn: Duration::from_millis(500),
            swap: Duration::from_millis(400),
            ai_win_reveal: Duration::from_millis(2000),
        }
    }
}

impl Pacing {
    /// Every deferred action fires on the next `advance`, however small.
    pub fn instant() -> Self {
        Self {
            ai_turn: Duration::ZERO,
            swap: Duration::ZERO,
            ai_win_reveal: Duration::ZERO,
        }
    }
}

/// Something the presentation layer may want to animate or announce.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    PlayerSwapped {
        hand_index: usize,
        table_index: usize,
        gave: Card,
        took: Card,
    },
    AiSwapped {
        hand_index: usize,
        table_index: usize,
        gave: Card,
        took: Card,
    },
    AiPassed,
    PlayerWon,
    /// The AI completed four of a kind; its hand is now face up.
    AiWinPending,
    AiWon,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Deferred {
    AiTurn,
    AiSwap(AiMove),
    PlayerSwap {
        hand_index: usize,
        table_index: usize,
    },
    RevealAiWin,
}

/// Round controller for a single-player game against one AI opponent.
/// Owns the game state, the random source and the queue of deferred
/// mutations; presentation code drives it through the methods below and
/// reads it through [`Engine::snapshot`].
///
/// # Examples
///
/// ```
/// use kems_engine::cards::{Card, Rank};
/// use kems_engine::engine::{Engine, Pacing};
/// use kems_engine::game::GameStatus;
/// use kems_engine::opponent::{AIOpponent, AiMove};
/// use rand::RngCore;
///
/// struct Idle;
/// impl AIOpponent for Idle {
///     fn choose_target(&self, hand: &[Card], _rng: &mut dyn RngCore) -> Option<Rank> {
///         hand.first().map(|c| c.rank)
///     }
///     fn choose_move(&self, _: &[Card], _: &[Card], _: Rank) -> Option<AiMove> {
///         None
///     }
///     fn name(&self) -> &str {
///         "Idle"
///     }
/// }
///
/// let mut engine = Engine::new(Some(42), Box::new(Idle), Pacing::instant());
/// engine.settle(); // the AI always moves first
/// assert_eq!(engine.turn_count(), 1);
///
/// engine.select_hand_card(0).unwrap();
/// engine.select_table_card(2).unwrap();
/// engine.settle();
/// assert!(engine.status() == GameStatus::Playing || engine.status() == GameStatus::PlayerWin);
/// ```
pub struct Engine {
    state: GameState,
    rng: ChaCha20Rng,
    seed: u64,
    games_started: u32,
    opponent: Box<dyn AIOpponent>,
    pacing: Pacing,
    scheduler: Scheduler<Deferred>,
    history: Vec<MoveRecord>,
}

impl Engine {
    /// Builds the controller and starts the first game. Without a seed one
    /// is drawn at random; either way [`Engine::seed`] reports it.
    pub fn new(seed: Option<u64>, opponent: Box<dyn AIOpponent>, pacing: Pacing) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let state = GameState::deal(&mut rng);
        let mut eng = Self {
            state,
            rng,
            seed,
            games_started: 0,
            opponent,
            pacing,
            scheduler: Scheduler::new(),
            history: Vec::new(),
        };
        eng.start(None);
        eng
    }

    /// Starts from a staged position instead of a fresh deal. If `state`
    /// carries no target rank the opponent picks one from its hand; a staged
    /// empty AI hand leaves it unset, so AI turns and Next Round do nothing.
    /// The AI opens, as in any new game.
    pub fn from_state(
        seed: u64,
        state: GameState,
        opponent: Box<dyn AIOpponent>,
        pacing: Pacing,
    ) -> Self {
        let mut eng = Self {
            state,
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed,
            games_started: 0,
            opponent,
            pacing,
            scheduler: Scheduler::new(),
            history: Vec::new(),
        };
        eng.start(None);
        eng
    }

    /// Replaces the whole game: fresh deck, fresh deal, cleared counters,
    /// new target rank, and the AI's opening turn scheduled. Anything still
    /// pending from the previous game is dropped. Returns the win, if the
    /// deal itself produced one.
    pub fn new_game(&mut self) -> Vec<GameEvent> {
        let state = GameState::deal(&mut self.rng);
        self.start(Some(state))
    }

    fn start(&mut self, state: Option<GameState>) -> Vec<GameEvent> {
        if let Some(s) = state {
            self.state = s;
        }
        self.scheduler.clear();
        self.history.clear();
        self.games_started += 1;

        if self.state.target_rank().is_none() {
            match self
                .opponent
                .choose_target(self.state.ai_hand(), &mut self.rng)
            {
                Some(r) => self.state.set_target_rank(r),
                None => warn!(ai = self.opponent.name(), "no target rank for an empty AI hand"),
            }
        }
        debug!(
            game = self.games_started,
            target = self.state.target_rank().map(Rank::value),
            ai = self.opponent.name(),
            "new game dealt"
        );

        let mut events = Vec::new();
        self.evaluate_win(&mut events);
        self.scheduler.schedule(self.pacing.ai_turn, Deferred::AiTurn);
        events
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn games_started(&self) -> u32 {
        self.games_started
    }
    pub fn opponent_name(&self) -> &str {
        self.opponent.name()
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }
    pub fn turn_count(&self) -> u32 {
        self.state.turn_count()
    }
    pub fn deck_remaining(&self) -> usize {
        self.state.deck().len()
    }
    pub fn selection(&self) -> Selection {
        self.state.selection()
    }
    pub fn target_rank(&self) -> Option<Rank> {
        self.state.target_rank()
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// A card mutation is scheduled and has not fired yet.
    pub fn is_busy(&self) -> bool {
        !self.scheduler.is_empty()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::of(&self.state, self.is_busy())
    }

    /// Selects hand slot `index`, or clears the selection when it is
    /// already selected. Ignored (returns `Ok(false)`) unless the game is
    /// playing and no player swap is in flight.
    pub fn select_hand_card(&mut self, index: usize) -> Result<bool, GameError> {
        let len = self.state.player_hand().len();
        if index >= len {
            return Err(GameError::InvalidHandIndex { index, len });
        }
        if self.state.status() != GameStatus::Playing || self.state.selection().table.is_some() {
            return Ok(false);
        }
        let sel = self.state.selection_mut();
        sel.hand = if sel.hand == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(true)
    }

    /// Picks table slot `index` to swap with the selected hand card. The
    /// exchange itself fires after the swap delay. Ignored unless the game
    /// is playing, a hand card is selected and nothing else is pending.
    pub fn select_table_card(&mut self, index: usize) -> Result<bool, GameError> {
        let len = self.state.table().len();
        if index >= len {
            return Err(GameError::InvalidTableIndex { index, len });
        }
        if self.state.status() != GameStatus::Playing || self.is_busy() {
            return Ok(false);
        }
        let Some(hand_index) = self.state.selection().hand else {
            return Ok(false);
        };
        self.state.selection_mut().table = Some(index);
        self.scheduler.schedule(
            self.pacing.swap,
            Deferred::PlayerSwap {
                hand_index,
                table_index: index,
            },
        );
        Ok(true)
    }

    /// Sends the table to the recycle pile, deals a new one (reshuffling the
    /// discards back in when the deck runs short) and schedules the AI's
    /// turn against it. The target rank carries over.
    pub fn next_round(&mut self) -> Result<bool, GameError> {
        if self.state.status() != GameStatus::Playing
            || self.state.target_rank().is_none()
            || self.is_busy()
        {
            return Ok(false);
        }
        let reshuffled = self.state.replace_table(&mut self.rng);
        self.state.clear_selection();
        if reshuffled {
            debug!(
                deck = self.state.deck().len(),
                "deck exhausted, recycled discards into a new deck"
            );
        }
        self.history.push(MoveRecord {
            turn: self.state.turn_count(),
            round: self.state.round(),
            actor: Actor::Player,
            kind: MoveKind::NewRound { reshuffled },
        });
        self.scheduler.schedule(self.pacing.ai_turn, Deferred::AiTurn);
        Ok(true)
    }

    /// Time until the next deferred action is due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Lets `elapsed` pass and fires every action that falls due, in order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let until = self.scheduler.now() + elapsed;
        let mut events = Vec::new();
        while let Some(action) = self.scheduler.pop_due(until) {
            self.fire(action, &mut events);
        }
        self.scheduler.advance_to(until);
        events
    }

    /// Fires everything outstanding, including actions scheduled while
    /// firing.
    pub fn settle(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        while let Some(wait) = self.scheduler.next_deadline() {
            events.extend(self.advance(wait));
        }
        events
    }

    fn fire(&mut self, action: Deferred, events: &mut Vec<GameEvent>) {
        match action {
            Deferred::AiTurn => self.resolve_ai_turn(events),
            Deferred::AiSwap(mv) => {
                if self.state.status() != GameStatus::Playing {
                    return;
                }
                let (gave, took) = self.state.swap_ai(mv.hand_index, mv.table_index);
                self.history.push(MoveRecord {
                    turn: self.state.turn_count(),
                    round: self.state.round(),
                    actor: Actor::Ai,
                    kind: MoveKind::Swap {
                        hand_index: mv.hand_index,
                        table_index: mv.table_index,
                        gave,
                        took,
                    },
                });
                events.push(GameEvent::AiSwapped {
                    hand_index: mv.hand_index,
                    table_index: mv.table_index,
                    gave,
                    took,
                });
                self.evaluate_win(events);
            }
            Deferred::PlayerSwap {
                hand_index,
                table_index,
            } => {
                if self.state.status() != GameStatus::Playing {
                    self.state.clear_selection();
                    return;
                }
                let (gave, took) = self.state.swap_player(hand_index, table_index);
                self.state.clear_selection();
                self.history.push(MoveRecord {
                    turn: self.state.turn_count(),
                    round: self.state.round(),
                    actor: Actor::Player,
                    kind: MoveKind::Swap {
                        hand_index,
                        table_index,
                        gave,
                        took,
                    },
                });
                events.push(GameEvent::PlayerSwapped {
                    hand_index,
                    table_index,
                    gave,
                    took,
                });
                self.evaluate_win(events);
            }
            Deferred::RevealAiWin => {
                if self.state.status() == GameStatus::AiWinPending {
                    self.state.set_status(GameStatus::AiWin);
                    info!(turns = self.state.turn_count(), "ai wins");
                    events.push(GameEvent::AiWon);
                }
            }
        }
    }

    /// One AI turn: ask for a move, schedule the swap if there is one, and
    /// count the turn either way.
    fn resolve_ai_turn(&mut self, events: &mut Vec<GameEvent>) {
        if self.state.status() != GameStatus::Playing {
            return;
        }
        let Some(target) = self.state.target_rank() else {
            return;
        };
        let proposed =
            self.opponent
                .choose_move(self.state.ai_hand(), self.state.table(), target);
        let mv = proposed.filter(|m| {
            let ok =
                m.hand_index < self.state.ai_hand().len() && m.table_index < self.state.table().len();
            if !ok {
                warn!(?m, ai = self.opponent.name(), "opponent proposed an out-of-range move");
            }
            ok
        });
        self.state.bump_turn();

        match mv {
            Some(mv) => {
                debug!(
                    turn = self.state.turn_count(),
                    table_index = mv.table_index,
                    hand_index = mv.hand_index,
                    "ai takes a table card"
                );
                self.scheduler.schedule(self.pacing.swap, Deferred::AiSwap(mv));
            }
            None => {
                debug!(turn = self.state.turn_count(), "ai passes");
                self.history.push(MoveRecord {
                    turn: self.state.turn_count(),
                    round: self.state.round(),
                    actor: Actor::Ai,
                    kind: MoveKind::Pass,
                });
                events.push(GameEvent::AiPassed);
            }
        }
    }

    fn evaluate_win(&mut self, events: &mut Vec<GameEvent>) {
        match self.state.evaluate_win() {
            Some(GameStatus::PlayerWin) => {
                info!(turns = self.state.turn_count(), "player wins");
                events.push(GameEvent::PlayerWon);
            }
            Some(GameStatus::AiWinPending) => {
                debug!("ai completed four of a kind, revealing hand");
                self.scheduler
                    .schedule(self.pacing.ai_win_reveal, Deferred::RevealAiWin);
                events.push(GameEvent::AiWinPending);
            }
            _ => {}
        }
    }

    /// Snapshot of the current game as a loggable record. The id and
    /// timestamp are left for [`GameLogger`](crate::logger::GameLogger).
    pub fn record(&self) -> GameRecord {
        GameRecord {
            game_id: String::new(),
            seed: self.seed,
            game_number: self.games_started,
            ai: self.opponent.name().to_string(),
            outcome: self.state.status(),
            turns: self.state.turn_count(),
            rounds: self.state.round(),
            target_rank: self.state.target_rank(),
            player_hand: self.state.player_hand().to_vec(),
            ai_hand: self.state.ai_hand().to_vec(),
            table: self.state.table().to_vec(),
            moves: self.history.clone(),
            ts: None,
        }
    }
}
