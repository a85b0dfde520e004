//! # kems-ai: AI Opponent for KEMS
//!
//! Provides the computer player that races the human to four of a kind.
//! Implementations plug into the engine through the [`AIOpponent`] trait,
//! which is re-exported here.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`baseline`] - Greedy target-rank strategist
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use kems_ai::create_ai;
//! use kems_engine::engine::{Engine, Pacing};
//!
//! let ai = create_ai("baseline").expect("baseline is always available");
//! let mut engine = Engine::new(Some(42), ai, Pacing::instant());
//!
//! // The AI opens every game.
//! engine.settle();
//! assert_eq!(engine.turn_count(), 1);
//! ```
//!
//! ## AI Types
//!
//! Currently supported AI types:
//! - `"baseline"` - Collects one fixed rank per game, one greedy swap per turn

pub use kems_engine::opponent::{AIOpponent, AiMove};

pub mod baseline;

/// Names accepted by [`create_ai`].
pub const AI_TYPES: &[&str] = &["baseline"];

/// Factory function to create AI opponents by type string.
///
/// # Arguments
///
/// * `ai_type` - String identifier for the AI type (e.g., "baseline")
///
/// # Returns
///
/// A boxed trait object implementing `AIOpponent`, or `None` for an
/// unknown type.
///
/// # Example
///
/// ```rust
/// use kems_ai::create_ai;
///
/// let ai = create_ai("baseline").unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("oracle").is_none());
/// ```
pub fn create_ai(ai_type: &str) -> Option<Box<dyn AIOpponent>> {
    match ai_type {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        _ => None,
    }
}
