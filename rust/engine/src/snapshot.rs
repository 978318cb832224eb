use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::Stage;

/// Point-in-time view of the whole table, produced after each successful
/// mutation for whatever renders the game. Plain data: the engine keeps no
/// reference to it and no rendering technology leaks in here.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub stage: Stage,
    /// Community cards revealed so far (0, 3, 4 or 5)
    pub community: Vec<Card>,
    pub pot: u32,
    /// Highest bet any active player must match this stage
    pub current_bet: u32,
    pub players: Vec<PlayerView>,
}

/// One seat as the renderer sees it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: usize,
    pub name: String,
    pub chips: u32,
    /// Chips committed in the current betting stage
    pub bet: u32,
    pub folded: bool,
    /// Hole cards dealt so far (empty before the deal, then exactly two)
    pub hole: Vec<Card>,
    pub is_turn: bool,
}
