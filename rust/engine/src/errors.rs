use thiserror::Error;

/// Recoverable rejections produced by the betting engine.
///
/// Every variant is message-only: the action that triggered it was refused
/// and the round state is untouched. The `Display` strings are the notices
/// shown verbatim to the acting player.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Player {0} not found")]
    PlayerNotFound(usize),
    #[error("It's not your turn!")]
    NotYourTurn,
    #[error("You have already folded.")]
    AlreadyFolded,
    #[error("Raise must be higher than the current bet.")]
    RaiseTooLow,
    #[error("You must call or raise.")]
    CheckFacingBet,
    #[error("Waiting for other players to act.")]
    RoundNotOver,
    #[error("The hand is already at showdown.")]
    HandComplete,
    #[error("The hand has already been dealt.")]
    AlreadyStarted,
    #[error("Deck exhausted")]
    DeckExhausted,
}
