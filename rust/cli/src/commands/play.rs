//! Interactive play: the render collaborator for the betting engine.
//!
//! Reads one command per line (`fold`, `check`, `call`, `raise N`, `next`,
//! `q`), applies it to the engine, and prints the table snapshot after each
//! successful mutation. Engine rejections are printed verbatim and the hand
//! continues; the game state never changes on a rejected command.

use crate::error::CliError;
use crate::formatters::{format_category, format_outcome, format_snapshot};
use crate::validation::{parse_player_action, ParseResult};
use holdem_engine::engine::{Engine, Stage, TableConfig};
use holdem_engine::logger::HandLogger;
use holdem_engine::player::Player;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn handle_play_command(
    seed: Option<u64>,
    chips: u32,
    log: Option<&Path>,
    input: &mut dyn BufRead,
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

    writeln!(out, "{}", format_snapshot(&engine.snapshot()))?;

    loop {
        let actor = engine.current_player();
        let name = engine.players()[actor].name().to_string();
        let id = engine.players()[actor].id();
        write!(out, "{}> ", name)?;
        out.flush()?;

        let Some(line) = read_line(input) else {
            break;
        };

        match parse_player_action(&line) {
            ParseResult::Quit => break,
            ParseResult::Invalid(msg) => writeln!(out, "{}", msg)?,
            ParseResult::Action(action) => match engine.handle_player_action(id, action) {
                Ok(outcome) => {
                    writeln!(out, "{}", format_outcome(&name, &outcome))?;
                    writeln!(out, "{}", format_snapshot(&engine.snapshot()))?;
                }
                Err(notice) => writeln!(out, "{}", notice)?,
            },
            ParseResult::Next => match engine.next_stage() {
                Ok(Stage::Showdown) => {
                    writeln!(out, "{}", format_snapshot(&engine.snapshot()))?;
                    if let Some(result) = engine.showdown() {
                        for &(pid, category) in &result.rankings {
                            writeln!(
                                out,
                                "{}: {}",
                                engine.players()[pid].name(),
                                format_category(category)
                            )?;
                        }
                        let winners: Vec<&str> = result
                            .winners
                            .iter()
                            .map(|&pid| engine.players()[pid].name())
                            .collect();
                        writeln!(out, "winner(s): {}", winners.join(", "))?;
                    }
                    break;
                }
                Ok(_) => writeln!(out, "{}", format_snapshot(&engine.snapshot()))?,
                Err(notice) => writeln!(out, "{}", notice)?,
            },
        }
    }

    if let Some(path) = log {
        let mut logger = HandLogger::create(path)?;
        let id = logger.next_id();
        logger.write(&engine.hand_record(id))?;
        writeln!(out, "hand written to {}", path.display())?;
    }
    Ok(())
}

/// `None` on EOF or a read error; the play loop treats both as quit.
fn read_line(input: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}
