use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// A betting-round command issued by a player. All-in is not a command:
/// it is the outcome of calling or raising with an insufficient stack.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when not facing a live bet)
    Check,
    /// Match the current table bet
    Call,
    /// Raise the table bet to the given total
    Raise(u32),
}

/// Default starting stack for each seat in chips
pub const STARTING_CHIPS: u32 = 100;

/// One seat at the table: chip stack, hole cards, and the amount committed
/// in the current betting stage.
#[derive(Debug, Clone)]
pub struct Player {
    id: usize,
    name: String,
    chips: u32,
    bet: u32,
    hole: [Option<Card>; 2],
    folded: bool,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, chips: u32) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            bet: 0,
            hole: [None, None],
            folded: false,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    /// Chips committed in the current betting stage.
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn folded(&self) -> bool {
        self.folded
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), String> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err("Hole cards already full".to_string())
        }
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    /// Moves `amount` from the stack into the current-stage bet.
    /// Callers must size `amount` to the stack; this never underflows.
    pub(crate) fn commit(&mut self, amount: u32) {
        let amount = amount.min(self.chips);
        self.chips -= amount;
        self.bet += amount;
    }

    /// Replaces the stage bet with `total`, paying the difference from the
    /// stack. Used by a full raise, where the bet becomes the raise target.
    pub(crate) fn commit_to(&mut self, total: u32) {
        let diff = total.saturating_sub(self.bet);
        self.chips -= diff;
        self.bet = total;
    }

    /// Zeroes the stage bet at a street transition.
    pub(crate) fn reset_bet(&mut self) {
        self.bet = 0;
    }

    /// All chips in front of the player are gone but they have not folded.
    pub fn is_all_in(&self) -> bool {
        self.chips == 0 && !self.folded
    }
}
