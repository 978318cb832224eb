//! Card, table, and outcome formatters for terminal display.
//!
//! Pure functions from engine value objects to strings. Unicode suit
//! symbols with an ASCII fallback for terminals that cannot render them.

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::engine::ActionOutcome;
use holdem_engine::hand::Category;
use holdem_engine::snapshot::TableSnapshot;

/// Whether the terminal can render Unicode suit symbols. On Windows this
/// checks for a modern terminal; elsewhere Unicode is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_rank(rank: Rank) -> &'static str {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// `[Ah Kd Qs]`, or `[]` before the flop.
pub fn format_board(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", inner.join(" "))
}

/// Multi-line table view: stage, board, pot, and one line per seat.
pub fn format_snapshot(snap: &TableSnapshot) -> String {
    let mut lines = Vec::with_capacity(snap.players.len() + 1);
    lines.push(format!(
        "{} {} | pot {} | to match {}",
        snap.stage.name(),
        format_board(&snap.community),
        snap.pot,
        snap.current_bet
    ));
    for p in &snap.players {
        let marker = if p.is_turn { "*" } else { " " };
        let status = if p.folded { " folded" } else { "" };
        lines.push(format!(
            "{} {}: chips {} bet {} {}{}",
            marker,
            p.name,
            p.chips,
            p.bet,
            format_board(&p.hole),
            status
        ));
    }
    lines.join("\n")
}

/// The notice for an applied action, phrased like the table would say it.
pub fn format_outcome(name: &str, outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Folded => format!("{} folds.", name),
        ActionOutcome::Called { .. } => format!("{} calls.", name),
        ActionOutcome::CalledAllIn { .. } => format!("{} calls and is all-in.", name),
        ActionOutcome::RaisedTo { amount } => format!("{} raises to {}.", name, amount),
        ActionOutcome::RaisedAllIn { target, .. } => {
            format!("{} raises to {} and is all-in.", name, target)
        }
        ActionOutcome::Checked => format!("{} checks.", name),
    }
}

/// `Straight Flush (9)`
pub fn format_category(category: Category) -> String {
    format!("{} ({})", category.name(), category.rank())
}
