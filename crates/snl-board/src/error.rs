//! Error types for board validation.

use crate::board::Cell;

/// Alias for `Result<T, BoardError>`.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors reported when validating a board layout.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A transit endpoint lies outside the 1..=100 cell range.
    #[error("cell {0} is not on the board")]
    CellOffBoard(Cell),

    /// A transit starts on the entry cell or the final cell, where it
    /// could never trigger.
    #[error("a snake or ladder cannot start on cell {0}")]
    InvalidSource(Cell),

    /// A snake whose tail is not below its head.
    #[error("snake at {head} must descend: tail is {tail}")]
    SnakeAscends {
        /// The snake's head (landing) cell.
        head: Cell,
        /// The snake's tail (destination) cell.
        tail: Cell,
    },

    /// A ladder whose top is not above its bottom.
    #[error("ladder at {bottom} must ascend: top is {top}")]
    LadderDescends {
        /// The ladder's bottom (landing) cell.
        bottom: Cell,
        /// The ladder's top (destination) cell.
        top: Cell,
    },

    /// Two transits share the same landing cell.
    #[error("two transits start on cell {0}")]
    DuplicateSource(Cell),

    /// A transit delivers the pawn onto another transit's landing cell.
    #[error("cell {0} is both a transit destination and a transit source")]
    ChainedTransit(Cell),
}
