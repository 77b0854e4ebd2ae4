//! The read-only view a renderer consumes.

use serde::{Deserialize, Serialize};

use crate::engine::TurnPhase;
use crate::player::{Player, PlayerState};

/// A point-in-time view of the game, cheap to clone and serialize.
///
/// Produced by [`crate::GameEngine::snapshot`]; carries everything a
/// renderer needs to draw a frame without touching the engine again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player one's pawn.
    pub player_one: PlayerState,
    /// Player two's pawn.
    pub player_two: PlayerState,
    /// Whose turn it is.
    pub active_player: Player,
    /// The most recent event description, if any.
    pub last_message: Option<String>,
    /// The winner, once the game has ended.
    pub winner: Option<Player>,
    /// Current phase; anything but `Idle` means the roll control is locked.
    pub phase: TurnPhase,
}

impl Snapshot {
    /// The pawn state for the given player.
    pub fn player(&self, player: Player) -> PlayerState {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}
