//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "holdem",
    about = "Heads-up Texas Hold'em betting rounds in the terminal"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play one hand, reading actions from stdin
    Play {
        /// RNG seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Starting stack for both seats
        #[arg(long, default_value_t = holdem_engine::player::STARTING_CHIPS)]
        chips: u32,
        /// Append the finished hand to this JSONL history file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Deal a hand and print the table for inspection
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = holdem_engine::player::STARTING_CHIPS)]
        chips: u32,
        /// Print the snapshot as JSON instead of the table view
        #[arg(long)]
        json: bool,
    },
    /// Rank 5-7 cards, e.g. `holdem eval Ah Kh Qh Jh Th`
    Eval {
        /// Cards as rank+suit tokens: A K Q J T or 2-10, then h/d/c/s
        cards: Vec<String>,
    },
}
