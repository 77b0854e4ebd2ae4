//! Error types for the game engine.

use crate::player::Player;

/// Convenience result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors returned by engine operations. A rejected operation leaves the
/// engine state unchanged.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A die value outside 1..=6 was supplied.
    #[error("invalid dice value: {0} (expected 1-6)")]
    InvalidDiceValue(u8),

    /// A roll was attempted while an earlier roll is still resolving.
    #[error("a roll is already in progress")]
    RollInProgress,

    /// An operation other than reset was attempted after the game ended.
    #[error("game is over: {0} has won")]
    GameFinished(Player),
}
