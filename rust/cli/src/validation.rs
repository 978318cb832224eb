//! Parsing of player input: betting commands and card tokens.

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::player::PlayerAction;

/// What one line of player input meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// A betting command for the engine
    Action(PlayerAction),
    /// Advance to the next stage
    Next,
    /// Leave the hand
    Quit,
    /// Anything else, with a notice for the player
    Invalid(String),
}

pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "n" | "next" => ParseResult::Next,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 10')".to_string(),
                );
            }
            match parts[1].parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, next, q",
            parts[0]
        )),
    }
}

/// Parses a card token like `Ah`, `Td`, `10c` or `7s`.
pub fn parse_card(token: &str) -> Result<Card, String> {
    let token = token.trim();
    if !token.is_ascii() {
        return Err(format!("Unrecognized card '{}'", token));
    }
    let (rank_part, suit_part) = match token.len() {
        2 => (&token[..1], &token[1..]),
        3 => (&token[..2], &token[2..]),
        _ => return Err(format!("Unrecognized card '{}'", token)),
    };

    let rank = match rank_part.to_uppercase().as_str() {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "10" | "T" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        other => return Err(format!("Unrecognized rank '{}'", other)),
    };
    let suit = match suit_part.to_lowercase().as_str() {
        "h" => Suit::Hearts,
        "d" => Suit::Diamonds,
        "c" => Suit::Clubs,
        "s" => Suit::Spades,
        other => return Err(format!("Unrecognized suit '{}'", other)),
    };
    Ok(Card { suit, rank })
}
