//! Rules command: the menu's About and How to Play texts.

use crate::error::CliError;
use std::io::Write;

pub const ABOUT: &str = "A fun card matching game. Match 4 cards of the same rank to win!";

pub const HOW_TO_PLAY: &str =
    "Click cards from the center to swap with your hand. Get 4 matching cards to win!";

/// Terminal equivalents of the table gestures.
const CONTROLS: &str = "\
In the terminal, pick one of your cards with `h <1-4>`, then a center card
with `t <1-4>` to swap them. `n` deals a fresh center (the AI then takes its
turn), `new` starts over and `q` quits. The AI collects one rank and swaps
at most once per round; whoever holds four of a kind first wins.";

pub fn handle_rules_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "About KEMS")?;
    writeln!(out, "{}", ABOUT)?;
    writeln!(out)?;
    writeln!(out, "How to Play")?;
    writeln!(out, "{}", HOW_TO_PLAY)?;
    writeln!(out)?;
    writeln!(out, "{}", CONTROLS)?;
    Ok(())
}
