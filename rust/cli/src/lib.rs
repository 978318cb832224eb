//! # holdem CLI
//!
//! Terminal front-end for the `holdem-engine` betting core. The engine only
//! produces value snapshots; everything printed here is this crate's
//! rendering of those snapshots.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand handler. All handlers write to injected streams, so tests
//! drive them with in-memory buffers.
//!
//! ## Subcommands
//!
//! - `play`: play one hand interactively, optionally logging it as JSONL
//! - `deal`: deal a hand and print the opening table
//! - `eval`: rank 5-7 cards given as tokens like `Ah Kd Qs Jc 10h`

use clap::Parser;
use std::io::{self, BufRead, Write};

pub mod cli;
mod commands;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{handle_deal_command, handle_eval_command, handle_play_command};
pub use error::CliError;

/// Parses arguments and runs the selected subcommand, reading interactive
/// input from stdin. Returns the process exit code.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_with_input(args, &mut input, out, err)
}

/// [`run`] with an injected input stream, for tests and scripted play.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let cli = match HoldemCli::try_parse_from(args.iter().map(String::as_str)) {
        Ok(cli) => cli,
        Err(e) => {
            // clap renders its own help/usage/version text
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match &cli.command {
        Commands::Play { seed, chips, log } => {
            handle_play_command(*seed, *chips, log.as_deref(), input, out)
        }
        Commands::Deal { seed, chips, json } => handle_deal_command(*seed, *chips, *json, out),
        Commands::Eval { cards } => handle_eval_command(cards, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "{}", e);
            exit_code::ERROR
        }
    }
}
