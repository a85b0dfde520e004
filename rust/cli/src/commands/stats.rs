//! Statistics aggregation over JSONL game records.
//!
//! Reads the files written by `play --log` and `sim --output` and prints
//! wins per side, unfinished games and the average length of finished games.

use crate::error::CliError;
use crate::io_utils::read_text;
use crate::parse_json_or_continue;
use crate::ui;
use kems_engine::game::GameStatus;
use kems_engine::logger::GameRecord;
use std::io::Write;

/// Running totals over game records. Shared with `sim`.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct Summary {
    pub games: u64,
    pub player_wins: u64,
    pub ai_wins: u64,
    pub unfinished: u64,
    finished_turns: u64,
}

impl Summary {
    pub fn add(&mut self, rec: &GameRecord) {
        self.games += 1;
        match rec.outcome {
            GameStatus::PlayerWin => self.player_wins += 1,
            GameStatus::AiWin => self.ai_wins += 1,
            _ => self.unfinished += 1,
        }
        if rec.is_finished() {
            self.finished_turns += u64::from(rec.turns);
        }
    }

    pub fn average_turns(&self) -> f64 {
        let finished = self.player_wins + self.ai_wins;
        if finished == 0 {
            0.0
        } else {
            self.finished_turns as f64 / finished as f64
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "games": self.games,
            "player_wins": self.player_wins,
            "ai_wins": self.ai_wins,
            "unfinished": self.unfinished,
            "average_turns": self.average_turns(),
        })
    }

    pub fn write_to(&self, out: &mut dyn Write) -> Result<(), CliError> {
        let json = serde_json::to_string_pretty(&self.to_json())
            .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
        writeln!(out, "{}", json)?;
        Ok(())
    }
}

/// Aggregates statistics from a JSONL game record file.
///
/// Malformed lines are reported on `err` and skipped. A file with no
/// readable record at all is an error.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text(&input)
        .map_err(|e| CliError::Config(format!("Failed to read {}: {}", input, e)))?;

    let mut summary = Summary::default();
    let mut skipped = 0u64;
    for (n, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let rec: GameRecord = parse_json_or_continue!(line, err, format!("line {}", n + 1), skipped);
        summary.add(&rec);
    }

    if skipped > 0 {
        ui::display_warning(err, &format!("Skipped {} malformed record(s)", skipped))?;
    }
    if summary.games == 0 && skipped > 0 {
        return Err(CliError::InvalidInput(format!(
            "no valid game records in {}",
            input
        )));
    }
    summary.write_to(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: GameStatus, turns: u32) -> GameRecord {
        GameRecord {
            game_id: "20261019-000001".into(),
            seed: 1,
            game_number: 1,
            ai: "BaselineAI".into(),
            outcome,
            turns,
            rounds: turns,
            target_rank: None,
            player_hand: vec![],
            ai_hand: vec![],
            table: vec![],
            moves: vec![],
            ts: None,
        }
    }

    #[test]
    fn test_summary_counts_and_average() {
        let mut s = Summary::default();
        s.add(&record(GameStatus::PlayerWin, 4));
        s.add(&record(GameStatus::AiWin, 8));
        s.add(&record(GameStatus::Playing, 200));
        assert_eq!(s.games, 3);
        assert_eq!(s.player_wins, 1);
        assert_eq!(s.ai_wins, 1);
        assert_eq!(s.unfinished, 1);
        assert_eq!(s.average_turns(), 6.0);
    }

    #[test]
    fn test_empty_summary_average_is_zero() {
        assert_eq!(Summary::default().average_turns(), 0.0);
    }

    #[test]
    fn test_stats_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let good = serde_json::to_string(&record(GameStatus::AiWin, 5)).unwrap();
        std::fs::write(&path, format!("{good}\nnot json\n\n{good}\n")).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_stats_command(path.to_string_lossy().into_owned(), &mut out, &mut err).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["games"], 2);
        assert_eq!(json["ai_wins"], 2);
        let warnings = String::from_utf8(err).unwrap();
        assert!(warnings.contains("skipping line 2"), "{warnings}");
        assert!(warnings.contains("Skipped 1 malformed record(s)"));
    }

    #[test]
    fn test_stats_all_malformed_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jsonl");
        std::fs::write(&path, "{\"game_id\": 3}\n").unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_stats_command(path.to_string_lossy().into_owned(), &mut out, &mut err);
        assert!(matches!(r, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_stats_missing_file() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let r = handle_stats_command("nonexistent.jsonl".to_string(), &mut out, &mut err);
        assert!(matches!(r, Err(CliError::Config(_))));
    }
}
