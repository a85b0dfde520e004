//! Card, board and event formatters for terminal display.
//!
//! Pure functions from engine values to strings. Suits use Unicode symbols
//! where the terminal is likely to render them, with an ASCII fallback.
//!
//! - **Unicode mode**: ♥ ♦ ♣ ♠
//! - **ASCII mode**: h d c s
//!
//! ## Example
//!
//! ```rust
//! use kems_engine::cards::{Card, Rank, Suit};
//! use kems_cli::formatters::format_card;
//!
//! let queen = Card::new(Rank::Queen, Suit::Hearts);
//! assert!(format_card(&queen) == "Q♥" || format_card(&queen) == "Qh");
//! ```

use kems_engine::cards::{Card, Rank, Suit};
use kems_engine::engine::GameEvent;
use kems_engine::game::{GameSnapshot, GameStatus};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Face label: A, 2-10, J, Q, K.
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        r => r.value().to_string(),
    }
}

/// Format a Card as a string combining rank and suit, e.g. "10♣" or "10c".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Space-separated cards, e.g. "5♠ 5♥ 3♦ 7♣".
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// One row of numbered slots. The `selected` slot is wrapped in `<>`.
fn format_row(cards: &[Card], selected: Option<usize>) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if selected == Some(i) {
                format!("{}:<{}>", i + 1, format_card(c))
            } else {
                format!("{}:[{}]", i + 1, format_card(c))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full board: counters, AI hand (face down unless revealed), table and
/// the player's hand with the current selection marked.
pub fn format_board(snap: &GameSnapshot) -> String {
    let ai = if snap.ai_face_down {
        vec!["[??]"; snap.ai_hand.len()].join(" ")
    } else {
        format_row(&snap.ai_hand, None)
    };
    let mut lines = vec![
        format!(
            "Turns: {}  Round: {}  Deck: {}",
            snap.turn_count, snap.round, snap.deck_remaining
        ),
        format!("AI:     {}", ai),
        format!("Table:  {}", format_row(&snap.table, snap.selection.table)),
        format!("You:    {}", format_row(&snap.player_hand, snap.selection.hand)),
    ];
    lines.push(format_status(snap.status, snap.turn_count));
    lines.join("\n")
}

pub fn format_status(status: GameStatus, turns: u32) -> String {
    match status {
        GameStatus::Playing => "Status: playing".to_string(),
        GameStatus::PlayerWin => format!("You win! Completed in {} turns", turns),
        GameStatus::AiWinPending => "The AI reveals its hand...".to_string(),
        GameStatus::AiWin => format!("AI wins! Completed in {} turns", turns),
    }
}

pub fn format_event(event: &GameEvent) -> String {
    match event {
        GameEvent::PlayerSwapped { gave, took, .. } => {
            format!("You swapped {} for {}", format_card(gave), format_card(took))
        }
        GameEvent::AiSwapped { gave, took, .. } => {
            format!("AI swapped {} for {}", format_card(gave), format_card(took))
        }
        GameEvent::AiPassed => "AI passes".to_string(),
        GameEvent::PlayerWon => "Four of a kind!".to_string(),
        GameEvent::AiWinPending => "AI completed four of a kind!".to_string(),
        GameEvent::AiWon => "AI wins.".to_string(),
    }
}
