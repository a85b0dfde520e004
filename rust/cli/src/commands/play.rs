//! # Play Command
//!
//! Interactive game against the AI on stdin/stdout.
//!
//! The engine keeps its presentation delays on a virtual clock. This loop
//! drains them before every prompt, sleeping for real unless `--fast` is
//! given, so the AI's moves appear with the same rhythm as the table game.
//! Finished games are appended to the `--log` file as JSONL records.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_event};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, PlayCommand, parse_play_input};
use kems_ai::create_ai;
use kems_engine::engine::{Engine, Pacing};
use kems_engine::logger::GameLogger;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  h <1-4>   select (or deselect) one of your cards
  t <1-4>   swap the selected card with a table card
  n         next round: replace the table with fresh cards
  new       start a new game
  ?         show this help
  q         quit";

/// Handle the play command: interactive game against the AI.
///
/// # Arguments
///
/// * `seed` - RNG seed; falls back to the configured seed, then random
/// * `ai` - AI type; falls back to the configured AI
/// * `fast` - Skip the presentation delays
/// * `log` - JSONL file to append finished games to
/// * `out` - Output stream for the board and events
/// * `err` - Error stream for warnings and errors
/// * `stdin` - Input stream for player commands
///
/// # Examples
///
/// ```ignore
/// use std::io::{stdin, stdout, stderr};
///
/// let mut input = stdin().lock();
/// handle_play_command(Some(42), None, true, None, &mut stdout(), &mut stderr(), &mut input).unwrap();
/// ```
pub fn handle_play_command(
    seed: Option<u64>,
    ai: Option<String>,
    fast: bool,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?.config;
    let ai_name = ai.unwrap_or_else(|| cfg.ai.clone());
    let opponent = create_ai(&ai_name)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown AI '{}'", ai_name)))?;
    let pacing = if fast { Pacing::instant() } else { cfg.pacing() };
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match log {
        Some(path) => Some(GameLogger::append(&path)?),
        None => None,
    };

    let mut eng = Engine::new(Some(seed), opponent, pacing);
    writeln!(out, "play: seed={} ai={}", seed, eng.opponent_name())?;
    writeln!(out, "Type ? for help.")?;

    let mut logged = false;
    loop {
        drive(&mut eng, fast, out)?;
        writeln!(out, "{}", format_board(&eng.snapshot()))?;

        if eng.status().is_terminal() && !logged {
            if let Some(l) = logger.as_mut() {
                l.write(&eng.record())?;
            }
            logged = true;
            writeln!(out, "Type 'new' to play again or 'q' to quit.")?;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            break;
        };
        match parse_play_input(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Command(PlayCommand::NewGame) => {
                for ev in eng.new_game() {
                    writeln!(out, "{}", format_event(&ev))?;
                }
                logged = false;
                writeln!(out, "New game #{}", eng.games_started())?;
            }
            ParseResult::Command(cmd) => apply(&mut eng, cmd, out, err)?,
        }
    }

    writeln!(out, "Games played: {}", eng.games_started())?;
    Ok(())
}

/// Fire every pending deferred action, honoring the delays unless `fast`.
fn drive(eng: &mut Engine, fast: bool, out: &mut dyn Write) -> Result<(), CliError> {
    while let Some(wait) = eng.next_deadline() {
        if !fast && !wait.is_zero() {
            out.flush()?;
            std::thread::sleep(wait);
        }
        for ev in eng.advance(wait) {
            writeln!(out, "{}", format_event(&ev))?;
        }
    }
    Ok(())
}

fn apply(
    eng: &mut Engine,
    cmd: PlayCommand,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let (result, what) = match cmd {
        PlayCommand::SelectHand(i) => (eng.select_hand_card(i), "hand selection"),
        PlayCommand::SelectTable(i) => (
            eng.select_table_card(i),
            "table selection (pick one of your cards first)",
        ),
        PlayCommand::NextRound => (eng.next_round(), "next round"),
        PlayCommand::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(());
        }
        PlayCommand::NewGame => return Ok(()),
    };
    match result {
        Ok(true) => {}
        Ok(false) => ui::notice_ignored(out, what)?,
        Err(e) => ui::write_error(err, &e.to_string())?,
    }
    Ok(())
}
