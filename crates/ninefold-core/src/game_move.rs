//! A move: which block, which cell.

use std::fmt;

use crate::cell::Cell;
use crate::error::CoreError;

/// A single placement on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The block played in.
    pub block: Cell,
    /// The cell within that block; also the opponent's next active block.
    pub cell: Cell,
}

impl Move {
    #[inline]
    pub const fn new(block: Cell, cell: Cell) -> Move {
        Move { block, cell }
    }

    /// Build a move from the 1-based numbers used on the wire.
    pub fn from_numbers(block: u8, cell: u8) -> Result<Move, CoreError> {
        Ok(Move::new(Cell::try_new(block)?, Cell::try_new(cell)?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.block, self.cell)
    }
}
