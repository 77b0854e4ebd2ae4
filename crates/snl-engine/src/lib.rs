//! Turn-based game state machine for two-player Snakes and Ladders.
//!
//! The [`GameEngine`] owns all game state and enforces the movement rules:
//! entry on an exact 1, overshoot at the top of the board, snake and ladder
//! transits, bonus rolls on a six, and the win on cell 100. Rendering and
//! input stay outside; a frontend drives the engine by calling
//! [`GameEngine::roll_dice`] (or [`GameEngine::resolve_turn`] with an
//! explicit value), pumping [`GameEngine::advance`] with frame time, and
//! drawing from [`Snapshot`]s and the [`EventLog`].

/// Engine configuration: seed, pacing delays, log capacity.
pub mod config;
/// Seeded dice and validated roll values.
pub mod dice;
/// The game state machine itself.
pub mod engine;
/// Error types used throughout the crate.
pub mod error;
/// Game events and the bounded event log.
pub mod event;
/// Player identity and pawn state.
pub mod player;
/// Point-in-time state views.
pub mod snapshot;

/// Re-export engine configuration.
pub use config::GameConfig;
/// Re-export dice types.
pub use dice::{Dice, DiceRoll};
/// Re-export state machine types.
pub use engine::{GameEngine, TurnPhase, TurnResult};
/// Re-export error types.
pub use error::{GameError, GameResult};
/// Re-export event types.
pub use event::{EventLog, GameEvent, GameEventKind};
/// Re-export player types.
pub use player::{Player, PlayerState};
/// Re-export the state view.
pub use snapshot::Snapshot;
