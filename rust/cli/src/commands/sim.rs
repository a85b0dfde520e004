//! Simulation command: many games between an autopilot player and the AI.
//!
//! The autopilot plays the player's side with the same heuristic the
//! baseline AI uses: it fixes a target rank from its own hand, takes every
//! table card of that rank on offer, then asks for the next round. Games run
//! with instant pacing. Each game `i` is dealt from `seed + i`.
//!
//! # Environment Variables
//!
//! - `KEMS_SIM_BREAK_AFTER`: stop after N games, as if interrupted (for testing)
//!
//! # Examples
//!
//! ```no_run
//! use kems_cli::commands::sim::handle_sim_command;
//! use std::io;
//!
//! let mut out = io::stdout();
//! let mut err = io::stderr();
//! handle_sim_command(100, Some(42), 200, Some("data/sim.jsonl".to_string()), &mut out, &mut err).unwrap();
//! ```

use crate::commands::stats::Summary;
use crate::error::CliError;
use kems_ai::baseline::{determine_target_rank, get_ai_move};
use kems_ai::create_ai;
use kems_engine::engine::{Engine, Pacing};
use kems_engine::game::GameStatus;
use kems_engine::logger::GameLogger;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use tracing::debug;

/// Handle the sim command.
///
/// # Arguments
///
/// * `games` - Number of games to play (must be >= 1)
/// * `seed` - Base seed (game `i` uses `seed + i`); random when absent
/// * `max_turns` - AI turns after which a game is abandoned as unfinished
/// * `output` - JSONL file for the game records
/// * `out` - Output stream for the summary
/// * `err` - Output stream for error messages
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    max_turns: u32,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    if max_turns == 0 {
        return Err(CliError::InvalidInput("max-turns must be >= 1".to_string()));
    }

    let base_seed = seed.unwrap_or_else(rand::random);
    let mut logger = match output {
        Some(path) => Some(GameLogger::create(&path)?),
        None => None,
    };
    let break_after = std::env::var("KEMS_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u32>().ok());

    let mut summary = Summary::default();
    for i in 0..games {
        let game_seed = base_seed.wrapping_add(u64::from(i));
        let ai = create_ai("baseline")
            .ok_or_else(|| CliError::Engine("baseline AI unavailable".into()))?;
        let mut eng = Engine::new(Some(game_seed), ai, Pacing::instant());
        let mut autopilot = ChaCha20Rng::seed_from_u64(game_seed);
        autopilot.set_stream(1);

        play_to_completion(&mut eng, &mut autopilot, max_turns)?;

        let rec = eng.record();
        debug!(
            game = i + 1,
            outcome = rec.outcome.as_str(),
            turns = rec.turns,
            "sim game finished"
        );
        summary.add(&rec);
        if let Some(l) = logger.as_mut() {
            l.write(&rec)?;
        }

        let completed = i + 1;
        if let Some(b) = break_after
            && completed == b
            && completed < games
        {
            writeln!(err, "Interrupted: saved {}/{}", completed, games)?;
            return Err(CliError::Interrupted(format!(
                "saved {}/{}",
                completed, games
            )));
        }
    }

    writeln!(out, "Simulated: {} games (seed {})", games, base_seed)?;
    summary.write_to(out)
}

/// Autopilot the player's side until the game ends or `max_turns` AI turns
/// have been taken.
fn play_to_completion(
    eng: &mut Engine,
    rng: &mut ChaCha20Rng,
    max_turns: u32,
) -> Result<(), CliError> {
    eng.settle();
    let Some(target) = determine_target_rank(eng.state().player_hand(), rng) else {
        return Ok(());
    };

    while eng.status() == GameStatus::Playing && eng.turn_count() < max_turns {
        while let Some(mv) = get_ai_move(eng.state().player_hand(), eng.state().table(), target) {
            eng.select_hand_card(mv.hand_index)?;
            eng.select_table_card(mv.table_index)?;
            eng.settle();
            if eng.status() != GameStatus::Playing {
                return Ok(());
            }
        }
        eng.next_round()?;
        eng.settle();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kems_engine::logger::GameRecord;

    fn run_sim(games: u32, seed: u64, output: Option<String>) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_sim_command(games, Some(seed), 200, output, &mut out, &mut err);
        (r, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_zero_games_rejected() {
        let (r, _) = run_sim(0, 1, None);
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_summary_accounts_for_every_game() {
        let (r, out) = run_sim(20, 42, None);
        assert!(r.is_ok());
        assert!(out.starts_with("Simulated: 20 games (seed 42)"));
        let json_start = out.find('{').unwrap();
        let json: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
        let total = json["player_wins"].as_u64().unwrap()
            + json["ai_wins"].as_u64().unwrap()
            + json["unfinished"].as_u64().unwrap();
        assert_eq!(total, 20);
        assert_eq!(json["games"], 20);
    }

    #[test]
    fn test_sim_is_deterministic() {
        let (_, a) = run_sim(5, 9, None);
        let (_, b) = run_sim(5, 9, None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_records_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.jsonl");
        let (r, _) = run_sim(3, 5, Some(path.to_string_lossy().into_owned()));
        assert!(r.is_ok());
        let content = std::fs::read_to_string(&path).unwrap();
        let recs: Vec<GameRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].seed, 5);
        assert_eq!(recs[2].seed, 7);
        assert!(recs[0].game_id.ends_with("-000001"));
        assert!(recs[2].game_id.ends_with("-000003"));
    }

    #[test]
    fn test_autopilot_finishes_games() {
        let ai = create_ai("baseline").unwrap();
        let mut eng = Engine::new(Some(3), ai, Pacing::instant());
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        play_to_completion(&mut eng, &mut rng, 1000).unwrap();
        assert!(eng.status().is_terminal());
        assert_eq!(eng.state().card_count(), 52);
    }
}
