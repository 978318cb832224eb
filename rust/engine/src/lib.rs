//! # holdem-engine: Heads-Up Betting Round Core
//!
//! Models a two-player Texas Hold'em betting round: chip stacks, pot
//! accumulation, per-stage community cards, a turn-based betting state
//! machine, and category ranking of a player's best five-card hand out of
//! up to seven cards. Deterministic shuffles via seeded RNG make every hand
//! reproducible.
//!
//! Rendering, persistence, networking and multi-way side pots live outside
//! this crate: the engine only produces value snapshots and hand-history
//! records for collaborators to consume.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`engine`] - The betting state machine: actions, stages, round end
//! - [`hand`] - Hand category evaluation (High Card through Straight Flush)
//! - [`player`] - Seat state: chips, stage bet, hole cards, fold flag
//! - [`snapshot`] - Value-object table views for render collaborators
//! - [`logger`] - Hand-history records and JSONL serialization
//! - [`errors`] - Message-only rejection notices
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::engine::{Engine, TableConfig};
//! use holdem_engine::player::{Player, PlayerAction};
//!
//! let players = vec![Player::new(0, "Alice", 100), Player::new(1, "Bob", 100)];
//! let mut engine = Engine::new(players, TableConfig::default(), Some(7));
//! engine.start_game().unwrap();
//!
//! // Seat 0 completes the small blind; both bets now match the big blind.
//! engine.handle_player_action(0, PlayerAction::Call).unwrap();
//! let flop = engine.next_stage().unwrap();
//! assert_eq!(engine.community().len(), 3);
//! println!("stage is now {}", flop.name());
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! // The wheel: A-2-3-4-5 of mixed suits is a straight.
//! let wheel = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//!     Card { suit: Suit::Spades, rank: Rank::Four },
//!     Card { suit: Suit::Hearts, rank: Rank::Five },
//! ];
//! assert_eq!(evaluate_hand(&wheel), Category::Straight);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod snapshot;
