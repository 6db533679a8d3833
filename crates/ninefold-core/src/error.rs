//! Error types for board and move validation.

use crate::mark::Mark;

/// Errors raised when building or mutating game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A player symbol other than `x` or `o`.
    #[error("invalid mark symbol: '{symbol}'")]
    InvalidMark {
        /// The offending symbol.
        symbol: char,
    },
    /// A cell or block number outside 1-9.
    #[error("cell {value} out of range 1-9")]
    CellOutOfRange {
        /// The offending number.
        value: u8,
    },
    /// A move was attempted with [`Mark::Empty`].
    #[error("the empty mark cannot move")]
    EmptyMover,
    /// The move is not in the block the previous move dictates.
    #[error("move in block {found}, but block {expected} is active")]
    WrongBlock {
        /// The active block.
        expected: u8,
        /// The block the move named.
        found: u8,
    },
    /// The target cell already holds a mark.
    #[error("cell {cell} is already occupied by {occupant}")]
    Occupied {
        /// The target cell.
        cell: u8,
        /// The mark already there.
        occupant: Mark,
    },
}
