//! The 100-cell board: transit tables, validation, and cell classification.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{BoardError, BoardResult};

/// A board cell number. Cells run from 1 to [`FINAL_CELL`]; 0 is used by
/// the engine for a pawn that has not entered the board yet.
pub type Cell = u8;

/// The cell a pawn is placed on after a successful entry roll.
pub const ENTRY_CELL: Cell = 1;

/// The final cell; the first pawn to land here exactly wins.
pub const FINAL_CELL: Cell = 100;

/// Snake head -> tail pairs of the standard layout.
const STANDARD_SNAKES: [(Cell, Cell); 7] = [
    (25, 3),
    (42, 1),
    (56, 48),
    (61, 43),
    (92, 67),
    (94, 12),
    (98, 80),
];

/// Ladder bottom -> top pairs of the standard layout.
const STANDARD_LADDERS: [(Cell, Cell); 8] = [
    (7, 30),
    (16, 33),
    (20, 38),
    (36, 83),
    (50, 68),
    (63, 81),
    (71, 89),
    (86, 97),
];

/// A snake or ladder. Landing on its source cell relocates the pawn to
/// its destination cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Transit {
    /// A snake: landing on `head` sends the pawn down to `tail`.
    Snake {
        /// The landing cell that triggers the slide.
        head: Cell,
        /// The cell the pawn slides down to.
        tail: Cell,
    },
    /// A ladder: landing on `bottom` carries the pawn up to `top`.
    Ladder {
        /// The landing cell that triggers the climb.
        bottom: Cell,
        /// The cell the pawn climbs up to.
        top: Cell,
    },
}

impl Transit {
    /// The cell a pawn must land on to trigger this transit.
    pub fn source(self) -> Cell {
        match self {
            Self::Snake { head, .. } => head,
            Self::Ladder { bottom, .. } => bottom,
        }
    }

    /// The cell the pawn is relocated to.
    pub fn destination(self) -> Cell {
        match self {
            Self::Snake { tail, .. } => tail,
            Self::Ladder { top, .. } => top,
        }
    }
}

impl std::fmt::Display for Transit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snake { head, tail } => write!(f, "snake {head} -> {tail}"),
            Self::Ladder { bottom, top } => write!(f, "ladder {bottom} -> {top}"),
        }
    }
}

/// How a cell participates in the transit tables, for board display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CellKind {
    /// No transit touches this cell.
    Plain,
    /// A snake starts here; landing slides the pawn down.
    SnakeHead,
    /// A snake delivers pawns here.
    SnakeTail,
    /// A ladder starts here; landing carries the pawn up.
    LadderBottom,
    /// A ladder delivers pawns here.
    LadderTop,
}

/// An immutable snakes-and-ladders board: the two transit lookup tables.
///
/// Construction through [`Board::new`] validates the layout, so a `Board`
/// value is always playable.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    /// Snake head -> tail.
    snakes: HashMap<Cell, Cell>,
    /// Ladder bottom -> top.
    ladders: HashMap<Cell, Cell>,
}

impl Board {
    /// Build a board from snake `(head, tail)` and ladder `(bottom, top)`
    /// pairs.
    ///
    /// Validation rules:
    /// - every endpoint lies in 1..=100;
    /// - sources lie in 2..=99 (cell 1 is only reached by the entry rule,
    ///   and cell 100 ends the game before transits are consulted);
    /// - snakes descend, ladders ascend;
    /// - no two transits share a source cell;
    /// - no destination is itself a source, so slides never chain.
    pub fn new(
        snakes: impl IntoIterator<Item = (Cell, Cell)>,
        ladders: impl IntoIterator<Item = (Cell, Cell)>,
    ) -> BoardResult<Self> {
        let mut board = Self {
            snakes: HashMap::new(),
            ladders: HashMap::new(),
        };
        for (head, tail) in snakes {
            check_transit_cells(head, tail)?;
            if tail >= head {
                return Err(BoardError::SnakeAscends { head, tail });
            }
            if board.snakes.insert(head, tail).is_some() {
                return Err(BoardError::DuplicateSource(head));
            }
        }
        for (bottom, top) in ladders {
            check_transit_cells(bottom, top)?;
            if top <= bottom {
                return Err(BoardError::LadderDescends { bottom, top });
            }
            if board.ladders.insert(bottom, top).is_some() || board.snakes.contains_key(&bottom) {
                return Err(BoardError::DuplicateSource(bottom));
            }
        }
        board.check_chaining()?;
        Ok(board)
    }

    /// The fixed reference layout: 7 snakes and 8 ladders.
    pub fn standard() -> Self {
        // The constant tables satisfy every `new` invariant (asserted in
        // tests), so they can be loaded without re-validation.
        Self {
            snakes: STANDARD_SNAKES.into_iter().collect(),
            ladders: STANDARD_LADDERS.into_iter().collect(),
        }
    }

    /// Destination of the snake whose head is `cell`, if any.
    pub fn snake_tail(&self, cell: Cell) -> Option<Cell> {
        self.snakes.get(&cell).copied()
    }

    /// Destination of the ladder whose bottom is `cell`, if any.
    pub fn ladder_top(&self, cell: Cell) -> Option<Cell> {
        self.ladders.get(&cell).copied()
    }

    /// The transit triggered by landing on `cell`, if any.
    pub fn transit(&self, cell: Cell) -> Option<Transit> {
        if let Some(tail) = self.snake_tail(cell) {
            return Some(Transit::Snake { head: cell, tail });
        }
        self.ladder_top(cell)
            .map(|top| Transit::Ladder { bottom: cell, top })
    }

    /// Classify a cell for display. Sources win over destinations when a
    /// cell is both (a snake tail can double as a ladder top).
    pub fn cell_kind(&self, cell: Cell) -> CellKind {
        if self.snakes.contains_key(&cell) {
            CellKind::SnakeHead
        } else if self.ladders.contains_key(&cell) {
            CellKind::LadderBottom
        } else if self.snakes.values().any(|&tail| tail == cell) {
            CellKind::SnakeTail
        } else if self.ladders.values().any(|&top| top == cell) {
            CellKind::LadderTop
        } else {
            CellKind::Plain
        }
    }

    /// All snakes as `(head, tail)` pairs, sorted by head cell.
    pub fn snakes(&self) -> Vec<(Cell, Cell)> {
        let mut pairs: Vec<_> = self.snakes.iter().map(|(&head, &tail)| (head, tail)).collect();
        pairs.sort_unstable();
        pairs
    }

    /// All ladders as `(bottom, top)` pairs, sorted by bottom cell.
    pub fn ladders(&self) -> Vec<(Cell, Cell)> {
        let mut pairs: Vec<_> = self.ladders.iter().map(|(&bottom, &top)| (bottom, top)).collect();
        pairs.sort_unstable();
        pairs
    }

    /// Number of snakes on the board.
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders on the board.
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }

    /// Reject layouts where a destination is itself a source.
    fn check_chaining(&self) -> BoardResult<()> {
        for destination in self.snakes.values().chain(self.ladders.values()) {
            if self.snakes.contains_key(destination) || self.ladders.contains_key(destination) {
                return Err(BoardError::ChainedTransit(*destination));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Range checks shared by snakes and ladders: endpoints on the board,
/// source strictly inside it.
fn check_transit_cells(source: Cell, destination: Cell) -> BoardResult<()> {
    for cell in [source, destination] {
        if !(1..=FINAL_CELL).contains(&cell) {
            return Err(BoardError::CellOffBoard(cell));
        }
    }
    if source == ENTRY_CELL || source == FINAL_CELL {
        return Err(BoardError::InvalidSource(source));
    }
    Ok(())
}
