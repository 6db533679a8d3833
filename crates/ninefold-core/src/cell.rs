//! Positions 1-9 within a block, and blocks 1-9 within the board.

use std::fmt;

use crate::error::CoreError;

/// A position numbered 1-9, left to right, top to bottom:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
///
/// The same numbering names a block on the meta-board, which is what makes
/// the nested rule work: the cell just played is the next active block.
///
/// Stored as a zero-based index; [`number()`](Cell::number) gives the
/// 1-based value used on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u8);

impl Cell {
    /// Total number of cells in a block (and blocks on the board).
    pub const COUNT: usize = 9;

    /// Create a cell from its 1-based number, returning `None` if out of range.
    #[inline]
    pub const fn new(number: u8) -> Option<Cell> {
        if number >= 1 && number <= 9 {
            Some(Cell(number - 1))
        } else {
            None
        }
    }

    /// Like [`new`](Cell::new) but reports the offending value.
    pub fn try_new(number: u8) -> Result<Cell, CoreError> {
        Cell::new(number).ok_or(CoreError::CellOutOfRange { value: number })
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: usize) -> Cell {
        debug_assert!(index < Self::COUNT);
        Cell(index as u8)
    }

    /// Parse a single ASCII digit `1`-`9`.
    pub fn from_digit(c: char) -> Option<Cell> {
        let d = c.to_digit(10)?;
        Cell::new(d as u8)
    }

    /// Zero-based index (0..9).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number (1..=9).
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Iterate over all nine cells in ascending order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0u8..9).map(Cell)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self.number())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn new_accepts_one_through_nine() {
        for n in 1..=9 {
            let cell = Cell::new(n).unwrap();
            assert_eq!(cell.number(), n);
            assert_eq!(cell.index(), (n - 1) as usize);
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Cell::new(0).is_none());
        assert!(Cell::new(10).is_none());
        assert!(Cell::try_new(0).is_err());
    }

    #[test]
    fn from_digit() {
        assert_eq!(Cell::from_digit('5'), Cell::new(5));
        assert!(Cell::from_digit('0').is_none());
        assert!(Cell::from_digit('a').is_none());
    }

    #[test]
    fn all_in_order() {
        let numbers: Vec<u8> = Cell::all().map(Cell::number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn display_is_one_based() {
        assert_eq!(format!("{}", Cell::from_index_unchecked(0)), "1");
        assert_eq!(format!("{:?}", Cell::new(9).unwrap()), "Cell(9)");
    }
}
