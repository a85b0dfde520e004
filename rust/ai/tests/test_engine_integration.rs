use std::time::Duration;

use kems_ai::baseline::BaselineAI;
use kems_ai::create_ai;
use kems_engine::cards::{full_deck, Card, Rank, Suit};
use kems_engine::deck::Deck;
use kems_engine::engine::{Engine, GameEvent, Pacing};
use kems_engine::game::{GameState, GameStatus};

fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn staged(player: Vec<Card>, ai: Vec<Card>, table: Vec<Card>) -> GameState {
    let used: Vec<Card> = player.iter().chain(&ai).chain(&table).copied().collect();
    let rest: Vec<Card> = full_deck().into_iter().filter(|x| !used.contains(x)).collect();
    GameState::from_parts(Deck::from_cards(rest), player, ai, table, Vec::new())
}

#[test]
fn baseline_opens_by_taking_the_pair_rank() {
    let state = staged(
        vec![
            c(Rank::King, Suit::Spades),
            c(Rank::Queen, Suit::Hearts),
            c(Rank::Jack, Suit::Diamonds),
            c(Rank::Ten, Suit::Clubs),
        ],
        vec![
            c(Rank::Five, Suit::Spades),
            c(Rank::Five, Suit::Hearts),
            c(Rank::Three, Suit::Diamonds),
            c(Rank::Seven, Suit::Clubs),
        ],
        vec![
            c(Rank::Two, Suit::Clubs),
            c(Rank::Five, Suit::Diamonds),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Ace, Suit::Hearts),
        ],
    );
    let mut eng = Engine::from_state(7, state, Box::new(BaselineAI::new()), Pacing::default());
    assert_eq!(eng.target_rank(), Some(Rank::Five));

    assert!(eng.advance(Duration::from_millis(499)).is_empty());
    assert_eq!(eng.turn_count(), 0);
    eng.advance(Duration::from_millis(1));
    assert_eq!(eng.turn_count(), 1);
    assert!(eng.is_busy());

    let events = eng.advance(Duration::from_millis(400));
    assert_eq!(
        events,
        vec![GameEvent::AiSwapped {
            hand_index: 2,
            table_index: 1,
            gave: c(Rank::Three, Suit::Diamonds),
            took: c(Rank::Five, Suit::Diamonds),
        }]
    );
    let snap = eng.snapshot();
    assert_eq!(snap.ai_hand[2], c(Rank::Five, Suit::Diamonds));
    assert_eq!(snap.table[1], c(Rank::Three, Suit::Diamonds));
    assert!(snap.ai_face_down);
    assert!(!eng.is_busy());
}

#[test]
fn baseline_passes_when_table_lacks_target() {
    let state = staged(
        vec![
            c(Rank::King, Suit::Spades),
            c(Rank::Queen, Suit::Hearts),
            c(Rank::Jack, Suit::Diamonds),
            c(Rank::Ten, Suit::Clubs),
        ],
        vec![
            c(Rank::Eight, Suit::Spades),
            c(Rank::Eight, Suit::Hearts),
            c(Rank::Three, Suit::Diamonds),
            c(Rank::Seven, Suit::Clubs),
        ],
        vec![
            c(Rank::Two, Suit::Clubs),
            c(Rank::Four, Suit::Diamonds),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Ace, Suit::Hearts),
        ],
    );
    let mut eng = Engine::from_state(7, state, Box::new(BaselineAI::new()), Pacing::instant());
    let events = eng.settle();
    assert_eq!(events, vec![GameEvent::AiPassed]);
    assert_eq!(eng.turn_count(), 1);
    assert_eq!(eng.state().table()[0], c(Rank::Two, Suit::Clubs));
}

#[test]
fn target_comes_from_the_dealt_ai_hand() {
    for seed in 0..50u64 {
        let eng = Engine::new(
            Some(seed),
            create_ai("baseline").unwrap(),
            Pacing::instant(),
        );
        let target = eng.target_rank().unwrap();
        assert!(
            eng.state().ai_hand().iter().any(|x| x.rank == target),
            "seed {seed}: target {target:?} not in AI hand"
        );
    }
}

fn baseline_game(seed: u64) -> Engine {
    let mut eng = Engine::new(
        Some(seed),
        create_ai("baseline").unwrap(),
        Pacing::instant(),
    );
    eng.settle();
    eng
}

/// Whether the player's hand blocks the AI's target: a card of that rank the
/// player never gives up keeps the AI short of four.
fn player_blocks_target(eng: &Engine) -> bool {
    let target = eng.target_rank().unwrap();
    eng.state().player_hand().iter().any(|x| x.rank == target)
}

#[test]
fn passive_player_loses_when_not_holding_the_target() {
    let seeds: Vec<u64> = (0..40u64)
        .filter(|&seed| !player_blocks_target(&baseline_game(seed)))
        .collect();
    assert!(!seeds.is_empty());

    for seed in seeds {
        let mut eng = baseline_game(seed);
        let mut rounds = 0;
        while eng.status() == GameStatus::Playing && rounds < 2000 {
            assert!(eng.next_round().unwrap());
            eng.settle();
            assert_eq!(eng.state().card_count(), 52);
            rounds += 1;
        }
        eng.settle();
        assert!(
            eng.status().is_terminal(),
            "seed {seed}: still {:?} after {rounds} rounds",
            eng.status()
        );
        if eng.status() == GameStatus::AiWin {
            let target = eng.target_rank().unwrap();
            assert!(eng.state().ai_hand().iter().all(|x| x.rank == target));
            assert!(!eng.snapshot().ai_face_down);
        }
    }
}

#[test]
fn passive_player_holding_the_target_stalls_the_game() {
    let seeds: Vec<u64> = (0..40u64)
        .filter(|&seed| player_blocks_target(&baseline_game(seed)))
        .collect();
    assert!(seeds.contains(&3));

    for seed in seeds {
        let mut eng = baseline_game(seed);
        if eng.status() != GameStatus::Playing {
            // the deal itself gave the player four of a kind
            continue;
        }
        for round in 1..=300u32 {
            assert!(eng.next_round().unwrap());
            eng.settle();
            assert_eq!(eng.status(), GameStatus::Playing, "seed {seed}");
            assert_eq!(eng.turn_count(), round + 1);
            assert_eq!(eng.state().card_count(), 52);
        }
    }
}

#[test]
fn seeded_games_replay_identically() {
    let play = |seed: u64| {
        let mut eng = Engine::new(
            Some(seed),
            create_ai("baseline").unwrap(),
            Pacing::instant(),
        );
        eng.settle();
        for _ in 0..10 {
            if eng.next_round().unwrap_or(false) {
                eng.settle();
            }
        }
        eng.record()
    };
    assert_eq!(play(99), play(99));
}
