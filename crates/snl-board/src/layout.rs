//! Serpentine grid layout of the 100 cells.
//!
//! The board is drawn as a 10x10 grid with cell 1 at the bottom-left and
//! cell 100 at the top-left; rows alternate direction (boustrophedon).

use crate::board::{Cell, FINAL_CELL};

/// Cells per row (and rows per board) of the square grid.
pub const BOARD_SIDE: u8 = 10;

/// Grid coordinates of a cell as `(row, column)`, with row 0 at the
/// bottom and column 0 at the left. Returns `None` off the board,
/// including for the off-board marker cell 0.
pub fn cell_coordinates(cell: Cell) -> Option<(u8, u8)> {
    if !(1..=FINAL_CELL).contains(&cell) {
        return None;
    }
    let index = cell - 1;
    let row = index / BOARD_SIDE;
    let along = index % BOARD_SIDE;
    // Odd rows run right to left
    let column = if row % 2 == 0 {
        along
    } else {
        BOARD_SIDE - 1 - along
    };
    Some((row, column))
}

/// The cell at grid coordinates `(row, column)`; inverse of
/// [`cell_coordinates`]. Returns `None` outside the grid.
pub fn cell_at(row: u8, column: u8) -> Option<Cell> {
    if row >= BOARD_SIDE || column >= BOARD_SIDE {
        return None;
    }
    let along = if row % 2 == 0 {
        column
    } else {
        BOARD_SIDE - 1 - column
    };
    Some(row * BOARD_SIDE + along + 1)
}
