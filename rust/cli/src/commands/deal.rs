//! Deal command: deal one game and show every pile.
//!
//! Useful for checking what a seed produces before playing it.

use crate::error::CliError;
use crate::formatters::{format_cards, format_rank, format_status};
use kems_ai::create_ai;
use kems_engine::engine::{Engine, Pacing};
use kems_engine::game::GameStatus;
use std::io::Write;

/// Handle the deal command.
///
/// Deals one game (player, AI, table in that order) and prints both hands,
/// the table, the deck size and the AI's target rank. Nothing is played.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let ai = create_ai("baseline")
        .ok_or_else(|| CliError::Engine("baseline AI unavailable".into()))?;
    let eng = Engine::new(Some(seed), ai, Pacing::instant());
    let state = eng.state();

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Player: {}", format_cards(state.player_hand()))?;
    writeln!(out, "AI: {}", format_cards(state.ai_hand()))?;
    writeln!(out, "Table: {}", format_cards(state.table()))?;
    writeln!(out, "Deck: {}", eng.deck_remaining())?;
    if let Some(rank) = eng.target_rank() {
        writeln!(out, "AI target: {}", format_rank(&rank))?;
    }
    if eng.status() != GameStatus::Playing {
        writeln!(out, "{}", format_status(eng.status(), eng.turn_count()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_with_seed() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seed: 42"));
        assert!(output.contains("Player: "));
        assert!(output.contains("Table: "));
        assert!(output.contains("Deck: 40"));
        assert!(output.contains("AI target: "));
    }

    #[test]
    fn test_deal_command_deterministic() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        handle_deal_command(Some(7), &mut a).unwrap();
        handle_deal_command(Some(7), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_command_without_seed() {
        let mut out = Vec::new();
        assert!(handle_deal_command(None, &mut out).is_ok());
    }
}
