use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::game::GameStatus;

/// Which side made a move.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Player,
    Ai,
}

/// What happened on one resolved step of a game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveKind {
    /// A hand card was exchanged with a table card.
    Swap {
        hand_index: usize,
        table_index: usize,
        gave: Card,
        took: Card,
    },
    /// The AI found nothing to take.
    Pass,
    /// The table was replaced; `reshuffled` marks a recycle of the discards.
    NewRound { reshuffled: bool },
}

/// One entry of a game's move history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn counter at the time the move resolved
    pub turn: u32,
    /// Round the move belongs to (1-based)
    pub round: u32,
    pub actor: Actor,
    #[serde(flatten)]
    pub kind: MoveKind,
}

/// Complete record of one game, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed of the engine that dealt the game
    pub seed: u64,
    /// 1-based index of the game within that engine's lifetime
    pub game_number: u32,
    /// Name of the AI opponent
    pub ai: String,
    /// Status when the record was taken
    pub outcome: GameStatus,
    pub turns: u32,
    pub rounds: u32,
    pub target_rank: Option<Rank>,
    pub player_hand: Vec<Card>,
    pub ai_hand: Vec<Card>,
    pub table: Vec<Card>,
    pub moves: Vec<MoveRecord>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`GameRecord`]s to a JSONL file, one game per line.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, false)
    }

    /// Opens `path` for appending, keeping records already in it.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Self::open(path, true)
    }

    fn open<P: AsRef<Path>>(path: P, append: bool) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = if append {
            OpenOptions::new().create(true).append(true).open(path)?
        } else {
            File::create(path)?
        };
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    /// Writes `record`, assigning an id and timestamp when they are missing.
    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.game_id.is_empty() {
            rec.game_id = self.next_id();
        }
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
