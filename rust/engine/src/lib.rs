//! # kems-engine: KEMS Card Game Core
//!
//! Game state and turn resolution for KEMS, a single-player race to four of a
//! kind against a computer opponent. A 52-card deck is dealt into a player
//! hand, an AI hand and a shared table of four cards each; both sides swap
//! hand cards for table cards until one of them holds four cards of one rank.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Shuffled deck creation and non-destructive dealing
//! - [`hand`] - Rank tallies and the four-of-a-kind win check
//! - [`opponent`] - The seam the AI strategist plugs into
//! - [`game`] - The owned game-state aggregate, status and UI snapshot
//! - [`engine`] - Round controller: new game, swaps, AI turns, next round
//! - [`scheduler`] - Virtual-clock queue for deferred (paced) mutations
//! - [`logger`] - Move history and JSONL game records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use kems_engine::cards::{Card, Rank, Suit};
//! use kems_engine::hand::check_winning_hand;
//!
//! let hand = [
//!     Card::new(Rank::Seven, Suit::Spades),
//!     Card::new(Rank::Seven, Suit::Hearts),
//!     Card::new(Rank::Seven, Suit::Diamonds),
//!     Card::new(Rank::Seven, Suit::Clubs),
//! ];
//! assert!(check_winning_hand(&hand));
//! ```
//!
//! ## Deterministic Dealing
//!
//! Shuffles take an injectable random source, so seeded games replay exactly:
//!
//! ```rust
//! use kems_engine::deck::create_deck;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let a = create_deck(&mut ChaCha20Rng::seed_from_u64(42));
//! let b = create_deck(&mut ChaCha20Rng::seed_from_u64(42));
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod opponent;
pub mod scheduler;
