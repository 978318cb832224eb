//! Evaluate a set of cards from the command line.

use crate::error::CliError;
use crate::formatters::format_category;
use crate::validation::parse_card;
use holdem_engine::cards::Card;
use holdem_engine::hand::evaluate_hand;
use std::collections::HashSet;
use std::io::Write;

/// Parses 5-7 card tokens, ranks them, and prints the category.
pub fn handle_eval_command(tokens: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    // allow both `eval Ah Kd ...` and `eval "Ah Kd ..."`
    let tokens: Vec<&str> = tokens
        .iter()
        .flat_map(|t| t.split_whitespace())
        .collect();

    if !(5..=7).contains(&tokens.len()) {
        return Err(CliError::InvalidInput(format!(
            "Expected 5 to 7 cards, got {}",
            tokens.len()
        )));
    }

    let mut cards: Vec<Card> = Vec::with_capacity(tokens.len());
    for t in &tokens {
        cards.push(parse_card(t).map_err(CliError::InvalidInput)?);
    }
    let unique: HashSet<Card> = cards.iter().copied().collect();
    if unique.len() != cards.len() {
        return Err(CliError::InvalidInput("Duplicate card".to_string()));
    }

    let category = evaluate_hand(&cards);
    writeln!(out, "{}", format_category(category))?;
    Ok(())
}
