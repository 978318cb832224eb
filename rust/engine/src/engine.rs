use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate_hand, Category};
use crate::logger::{ActionRecord, HandRecord, ShowdownInfo};
use crate::player::{Player, PlayerAction};
use crate::snapshot::{PlayerView, TableSnapshot};

/// One of the five betting phases of a hand. Strictly linear: no stage is
/// ever skipped or revisited.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
            Stage::Showdown => "showdown",
        }
    }
}

/// Table stakes, fixed at construction and never reconfigured mid-hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Betting cap: raise targets above this are clamped down to it.
    pub max_bet: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 1,
            big_blind: 2,
            max_bet: 50,
        }
    }
}

/// What an applied (non-rejected) action did, for the render collaborator
/// to phrase. Amounts are chips actually moved or matched.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ActionOutcome {
    Folded,
    Called { amount: u32 },
    /// The call exceeded the stack; the whole stack went in instead.
    CalledAllIn { amount: u32 },
    RaisedTo { amount: u32 },
    /// The raise target exceeded the stack; `total` is the all-in bet that
    /// became the new table bet to match.
    RaisedAllIn { target: u32, total: u32 },
    Checked,
}

/// Categories of every player still in the hand at showdown, and the
/// holders of the best one. Kicker tie-breaking and payout are not
/// performed here.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShowdownResult {
    /// (player id, category) for each non-folded player
    pub rankings: Vec<(usize, Category)>,
    /// Player ids holding the highest category (several on a category tie)
    pub winners: Vec<usize>,
}

/// The betting engine for a single heads-up hand.
///
/// Owns the deck, the seats, the pot, and the stage machine; all mutation
/// goes through [`Engine::start_game`], [`Engine::handle_player_action`] and
/// [`Engine::next_stage`]. Rejected commands return a [`GameError`] and
/// leave the state untouched. Single-threaded by design: one command is
/// processed at a time and nothing here blocks or suspends.
///
/// ```
/// use holdem_engine::engine::{Engine, TableConfig};
/// use holdem_engine::player::{Player, PlayerAction};
///
/// let players = vec![Player::new(0, "Alice", 100), Player::new(1, "Bob", 100)];
/// let mut engine = Engine::new(players, TableConfig::default(), Some(42));
/// engine.start_game().unwrap();
///
/// // Blinds are posted: small blind 1, big blind 2.
/// assert_eq!(engine.pot(), 3);
/// assert_eq!(engine.current_bet(), 2);
///
/// // Seat 0 completes the small blind.
/// engine.handle_player_action(0, PlayerAction::Call).unwrap();
/// assert!(engine.has_round_ended());
/// ```
#[derive(Debug)]
pub struct Engine {
    config: TableConfig,
    seed: u64,
    deck: Deck,
    players: Vec<Player>,
    community: Vec<Card>,
    pot: u32,
    current_bet: u32,
    stage: Stage,
    current_player: usize,
    last_aggressor: Option<usize>,
    started: bool,
    actions: Vec<ActionRecord>,
    showdown: Option<ShowdownResult>,
}

impl Engine {
    /// A fresh engine for one hand. Two seats are the supported scope; the
    /// turn logic itself handles any seat count. Pass a seed to reproduce a
    /// shuffle exactly.
    pub fn new(players: Vec<Player>, config: TableConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or(0x5EED_CA2D);
        Self {
            config,
            seed,
            deck: Deck::new_with_seed(seed),
            players,
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            stage: Stage::Preflop,
            current_player: 0,
            last_aggressor: None,
            started: false,
            actions: Vec::new(),
            showdown: None,
        }
    }

    /// Shuffles, deals two hole cards per seat round-robin, posts the
    /// blinds (seat 0 small, seat 1 big) and opens the preflop round with
    /// the big blind as the bet to match.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        self.deck.shuffle();
        for _ in 0..2 {
            for p in &mut self.players {
                let c = self.deck.deal_card().ok_or(GameError::DeckExhausted)?;
                p.give_card(c).map_err(|_| GameError::AlreadyStarted)?;
            }
        }
        self.collect_blinds();
        self.current_bet = self.config.big_blind;
        // the big blind opens as the initial aggressor
        if self.players.len() > 1 {
            self.last_aggressor = Some(1);
        }
        self.started = true;
        Ok(())
    }

    /// A blind larger than the stack posts the whole stack (all-in blind).
    fn collect_blinds(&mut self) {
        let blinds = [self.config.small_blind, self.config.big_blind];
        for (p, &blind) in self.players.iter_mut().zip(blinds.iter()) {
            let posted = blind.min(p.chips());
            p.commit(posted);
            self.pot += posted;
        }
    }

    /// Applies one betting command for `player_id`.
    ///
    /// Rejections (wrong player, out of turn, already folded, hand over,
    /// short raise, check facing a bet) are message-only: the returned
    /// [`GameError`] carries the notice and no state changes. An applied
    /// action moves chips as specified, records itself in the hand history,
    /// and advances the turn to the next non-folded seat.
    pub fn handle_player_action(
        &mut self,
        player_id: usize,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id() == player_id)
            .ok_or(GameError::PlayerNotFound(player_id))?;
        if idx != self.current_player {
            return Err(GameError::NotYourTurn);
        }
        if self.players[idx].folded() {
            return Err(GameError::AlreadyFolded);
        }
        if self.stage == Stage::Showdown {
            return Err(GameError::HandComplete);
        }

        let outcome = match action {
            PlayerAction::Fold => {
                self.players[idx].fold();
                ActionOutcome::Folded
            }
            PlayerAction::Call => {
                let call_amount = self.current_bet.saturating_sub(self.players[idx].bet());
                if call_amount > self.players[idx].chips() {
                    let all_in = self.players[idx].chips();
                    self.players[idx].commit(all_in);
                    self.pot += all_in;
                    ActionOutcome::CalledAllIn { amount: all_in }
                } else {
                    self.players[idx].commit(call_amount);
                    self.pot += call_amount;
                    ActionOutcome::Called {
                        amount: call_amount,
                    }
                }
            }
            PlayerAction::Raise(amount) => {
                // an under-target all-in can re-pin the table bet below a
                // seat's own commitment; a raise must exceed both, or chips
                // already in the pot would vanish from the bet ledger
                if amount <= self.current_bet || amount <= self.players[idx].bet() {
                    return Err(GameError::RaiseTooLow);
                }
                // the strict-increase check runs on the requested amount;
                // the cap clamps only afterwards
                let amount = amount.min(self.config.max_bet);
                let raise_amount = amount.saturating_sub(self.players[idx].bet());
                if raise_amount > self.players[idx].chips() {
                    let all_in = self.players[idx].chips();
                    self.players[idx].commit(all_in);
                    self.pot += all_in;
                    // an under-target all-in still becomes the table bet
                    self.current_bet = self.players[idx].bet();
                    ActionOutcome::RaisedAllIn {
                        target: amount,
                        total: self.current_bet,
                    }
                } else {
                    self.players[idx].commit_to(amount);
                    self.pot += raise_amount;
                    self.current_bet = amount;
                    self.last_aggressor = Some(idx);
                    ActionOutcome::RaisedTo { amount }
                }
            }
            PlayerAction::Check => {
                if self.current_bet > self.players[idx].bet() {
                    return Err(GameError::CheckFacingBet);
                }
                ActionOutcome::Checked
            }
        };

        self.actions.push(ActionRecord {
            player_id,
            stage: self.stage,
            action,
        });
        self.advance_turn();
        Ok(outcome)
    }

    /// Moves the turn pointer to the next non-folded seat, wrapping around
    /// the table. Bounded scan: when every seat has folded there is no
    /// eligible next player, the pointer stays put and `None` is returned.
    fn advance_turn(&mut self) -> Option<usize> {
        let n = self.players.len();
        for step in 1..=n {
            let idx = (self.current_player + step) % n;
            if !self.players[idx].folded() {
                self.current_player = idx;
                return Some(idx);
            }
        }
        None
    }

    /// True when no active player still owes chips this stage.
    ///
    /// Active means neither folded nor all-in: a player with an empty stack
    /// cannot be asked to match further and never blocks round completion.
    /// Vacuously true with no active players left.
    pub fn has_round_ended(&self) -> bool {
        let mut active = self
            .players
            .iter()
            .filter(|p| !p.folded() && p.chips() > 0)
            .peekable();
        if active.peek().is_none() {
            return true;
        }
        active.all(|p| p.bet() >= self.current_bet)
    }

    /// Advances the stage machine once the betting round is complete.
    ///
    /// Preflop to flop reveals three community cards, flop to turn and turn
    /// to river one each, all off the top of the deck in shuffle order.
    /// River to showdown runs winner determination instead of revealing.
    /// Every transition resets the table bet, the per-seat stage bets, and
    /// hands the turn back to seat 0. While players still owe chips this
    /// returns [`GameError::RoundNotOver`] and mutates nothing.
    pub fn next_stage(&mut self) -> Result<Stage, GameError> {
        if !self.has_round_ended() {
            return Err(GameError::RoundNotOver);
        }
        match self.stage {
            Stage::Preflop => {
                self.reveal(3)?;
                self.stage = Stage::Flop;
            }
            Stage::Flop => {
                self.reveal(1)?;
                self.stage = Stage::Turn;
            }
            Stage::Turn => {
                self.reveal(1)?;
                self.stage = Stage::River;
            }
            Stage::River => {
                self.showdown = Some(self.determine_winner());
                self.stage = Stage::Showdown;
            }
            Stage::Showdown => return Err(GameError::HandComplete),
        }
        self.current_bet = 0;
        self.current_player = 0;
        for p in &mut self.players {
            p.reset_bet();
        }
        Ok(self.stage)
    }

    fn reveal(&mut self, n: usize) -> Result<(), GameError> {
        if self.deck.remaining() < n {
            return Err(GameError::DeckExhausted);
        }
        for _ in 0..n {
            if let Some(c) = self.deck.deal_card() {
                self.community.push(c);
            }
        }
        Ok(())
    }

    /// Evaluates each non-folded player's two hole cards together with the
    /// five community cards and picks the holders of the best category.
    /// Categories alone decide; equal categories tie.
    fn determine_winner(&self) -> ShowdownResult {
        let mut rankings = Vec::new();
        for p in self.players.iter().filter(|p| !p.folded()) {
            let mut cards: Vec<Card> = p.hole_cards().iter().flatten().copied().collect();
            cards.extend_from_slice(&self.community);
            rankings.push((p.id(), evaluate_hand(&cards)));
        }
        let winners = match rankings.iter().map(|&(_, c)| c).max() {
            Some(best) => rankings
                .iter()
                .filter(|&&(_, c)| c == best)
                .map(|&(id, _)| id)
                .collect(),
            None => Vec::new(),
        };
        ShowdownResult { rankings, winners }
    }

    /// The sole non-folded seat, if all others have folded. The engine does
    /// not auto-award the pot; the collaborator decides how to end the hand.
    pub fn last_player_standing(&self) -> Option<usize> {
        let mut live = self.players.iter().filter(|p| !p.folded());
        match (live.next(), live.next()) {
            (Some(p), None) => Some(p.id()),
            _ => None,
        }
    }

    /// Value-object view of the whole table for rendering. The engine has
    /// no display dependency; collaborators consume this snapshot.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            stage: self.stage,
            community: self.community.clone(),
            pot: self.pot,
            current_bet: self.current_bet,
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(i, p)| PlayerView {
                    id: p.id(),
                    name: p.name().to_string(),
                    chips: p.chips(),
                    bet: p.bet(),
                    folded: p.folded(),
                    hole: p.hole_cards().iter().flatten().copied().collect(),
                    is_turn: i == self.current_player,
                })
                .collect(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    /// Index of the seat whose turn it is.
    pub fn current_player(&self) -> usize {
        self.current_player
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }
    pub fn config(&self) -> TableConfig {
        self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }
    pub fn showdown(&self) -> Option<&ShowdownResult> {
        self.showdown.as_ref()
    }

    /// Hand-history record of everything that happened so far, ready for a
    /// [`crate::logger::HandLogger`].
    pub fn hand_record(&self, hand_id: String) -> HandRecord {
        HandRecord {
            hand_id,
            seed: Some(self.seed),
            actions: self.actions.clone(),
            board: self.community.clone(),
            result: None,
            ts: None,
            showdown: self.showdown.as_ref().map(|s| ShowdownInfo {
                winners: s.winners.clone(),
                notes: None,
            }),
        }
    }
}
