//! Deal a hand and print the opening table.

use crate::error::CliError;
use crate::formatters::format_snapshot;
use holdem_engine::engine::{Engine, TableConfig};
use holdem_engine::player::Player;
use std::io::Write;

pub fn handle_deal_command(
    seed: Option<u64>,
    chips: u32,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let players = vec![
        Player::new(0, "Player 1", chips),
        Player::new(1, "Player 2", chips),
    ];
    let mut engine = Engine::new(players, TableConfig::default(), seed);
    engine
        .start_game()
        .map_err(|e| CliError::Engine(e.to_string()))?;

    if json {
        let rendered = serde_json::to_string_pretty(&engine.snapshot())
            .map_err(|e| CliError::Engine(e.to_string()))?;
        writeln!(out, "{}", rendered)?;
        return Ok(());
    }

    writeln!(out, "seed: {}", engine.seed())?;
    writeln!(out, "{}", format_snapshot(&engine.snapshot()))?;
    writeln!(out, "deck remaining: {}", engine.deck_remaining())?;
    Ok(())
}
