//! Board model for a two-player snakes-and-ladders game.
//!
//! Defines the 100-cell board with its snake and ladder transit tables,
//! validated at construction, plus the serpentine grid layout used to
//! draw it. This crate is pure data: dice, clock, and turn state live in
//! the engine crate.

/// The board, its transit tables, and cell classification.
pub mod board;
/// Error types for board validation.
pub mod error;
/// Serpentine 10x10 grid coordinates.
pub mod layout;

/// Re-export the board types.
pub use board::{Board, Cell, CellKind, ENTRY_CELL, FINAL_CELL, Transit};
/// Re-export error types.
pub use error::{BoardError, BoardResult};
/// Re-export the grid layout helpers.
pub use layout::{BOARD_SIDE, cell_at, cell_coordinates};
