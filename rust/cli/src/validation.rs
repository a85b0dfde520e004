//! Input parsing for the interactive `play` command.
//!
//! Card slots are typed 1-based, the way they are drawn on screen, and
//! handed to the engine 0-based.

use kems_engine::hand::HAND_SIZE;

/// One thing the player asked for at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Select (or deselect) a hand slot, 0-based
    SelectHand(usize),
    /// Select a table slot to swap with, 0-based
    SelectTable(usize),
    NextRound,
    NewGame,
    Help,
}

/// Result type for parsing a line typed at the `play` prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Command(PlayCommand),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a [`PlayCommand`] or quit.
///
/// Accepts (case-insensitive):
/// - `h N` / `hand N` select hand card N (1-4)
/// - `t N` / `table N` swap with table card N (1-4)
/// - `n` / `next` next round
/// - `new` new game
/// - `?` / `help`
/// - `q` / `quit`
///
/// # Example
///
/// ```rust
/// # use kems_cli::validation::{parse_play_input, ParseResult, PlayCommand};
/// assert_eq!(
///     parse_play_input("h 2"),
///     ParseResult::Command(PlayCommand::SelectHand(1))
/// );
/// assert_eq!(parse_play_input("q"), ParseResult::Quit);
///
/// match parse_play_input("t 9") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("1-4")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_play_input(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input (type ? for help)".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "h" | "hand" => match parse_slot(parts.get(1).copied()) {
            Ok(i) => ParseResult::Command(PlayCommand::SelectHand(i)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "t" | "table" => match parse_slot(parts.get(1).copied()) {
            Ok(i) => ParseResult::Command(PlayCommand::SelectTable(i)),
            Err(msg) => ParseResult::Invalid(msg),
        },
        "n" | "next" => ParseResult::Command(PlayCommand::NextRound),
        "new" => ParseResult::Command(PlayCommand::NewGame),
        "?" | "help" => ParseResult::Command(PlayCommand::Help),
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}' (type ? for help)",
            other
        )),
    }
}

fn parse_slot(arg: Option<&str>) -> Result<usize, String> {
    let Some(arg) = arg else {
        return Err(format!("A card number is required (1-{})", HAND_SIZE));
    };
    match arg.parse::<usize>() {
        Ok(n) if (1..=HAND_SIZE).contains(&n) => Ok(n - 1),
        _ => Err(format!("Card number must be 1-{}, got '{}'", HAND_SIZE, arg)),
    }
}
