//! Command-line argument definitions for the `kems` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "kems",
    version,
    about = "KEMS: race the AI to four of a kind"
)]
pub struct KemsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game against the AI
    Play {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// AI opponent type
        #[arg(long)]
        ai: Option<String>,
        /// Skip the presentation delays
        #[arg(long)]
        fast: bool,
        /// Append finished games to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one game and print every pile
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play many games between an autopilot player and the AI
    Sim {
        #[arg(long)]
        games: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// AI turns after which a game counts as unfinished
        #[arg(long, default_value_t = 200)]
        max_turns: u32,
        /// Write game records to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Summarize a JSONL file of game records
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Show the rules
    Rules,
}
