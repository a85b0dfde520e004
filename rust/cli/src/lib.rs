//! # KEMS CLI Library
//!
//! Command-line front end for the KEMS card game: an interactive game on the
//! terminal, plus tools to deal, simulate and summarize games.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play against the AI on stdin/stdout
//! - `deal`: Deal a single game for inspection
//! - `sim`: Play many autopilot games and summarize the results
//! - `stats`: Aggregate statistics from JSONL game records
//! - `cfg`: Display current configuration settings
//! - `rules`: Display the rules

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
mod config;
mod error;
mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, KemsCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rules_command,
    handle_sim_command, handle_stats_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "sim", "stats", "cfg", "rules"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["kems", "deal", "--seed", "42"];
/// let code = kems_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match KemsCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "KEMS card game CLI");
                    write_or_exit!(err, "Usage: kems <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: kems --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            ai,
            fast,
            log,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(seed, ai, fast, log, out, err, &mut stdin_lock)
        }
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Sim {
            games,
            seed,
            max_turns,
            output,
        } => handle_sim_command(games, seed, max_turns, output, out, err),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Cfg => handle_cfg_command(out),
        Commands::Rules => handle_rules_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
