//! A single 3x3 sub-board.

use std::fmt;

use crate::cell::Cell;
use crate::error::CoreError;
use crate::mark::Mark;

/// The eight winning lines of a block: three rows, three columns, two diagonals.
pub const LINES: [[Cell; 3]; 8] = {
    const fn line(a: usize, b: usize, c: usize) -> [Cell; 3] {
        [
            Cell::from_index_unchecked(a),
            Cell::from_index_unchecked(b),
            Cell::from_index_unchecked(c),
        ]
    }
    [
        line(0, 1, 2),
        line(3, 4, 5),
        line(6, 7, 8),
        line(0, 3, 6),
        line(1, 4, 7),
        line(2, 5, 8),
        line(0, 4, 8),
        line(2, 4, 6),
    ]
};

/// Canonical cache key of a block: the nine cells packed base-3.
///
/// Depends only on cell contents, never on the order the marks were placed.
/// `3^9 = 19683` fits comfortably in a `u16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockKey(u16);

/// One of the nine 3x3 playing surfaces.
///
/// A plain value: copying a block copies its nine cells and nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Block {
    cells: [Mark; Cell::COUNT],
}

impl Block {
    /// An empty block.
    pub const EMPTY: Block = Block {
        cells: [Mark::Empty; Cell::COUNT],
    };

    /// Create an empty block.
    pub const fn new() -> Block {
        Self::EMPTY
    }

    /// Return the mark at `cell`.
    #[inline]
    pub fn get(&self, cell: Cell) -> Mark {
        self.cells[cell.index()]
    }

    /// Return `true` if `cell` is unoccupied.
    #[inline]
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Place `mark` on `cell`.
    ///
    /// Fails if the cell is occupied or `mark` is [`Mark::Empty`].
    pub fn place(&mut self, cell: Cell, mark: Mark) -> Result<(), CoreError> {
        if mark.is_empty() {
            return Err(CoreError::EmptyMover);
        }
        if !self.is_open(cell) {
            return Err(CoreError::Occupied {
                cell: cell.number(),
                occupant: self.get(cell),
            });
        }
        self.cells[cell.index()] = mark;
        Ok(())
    }

    /// Return a copy of this block with `mark` placed on `cell`, which must be open.
    ///
    /// Used for one-ply lookahead during move ordering.
    pub fn with_mark(&self, cell: Cell, mark: Mark) -> Block {
        debug_assert!(self.is_open(cell), "hypothetical move on occupied cell {cell}");
        let mut copy = *self;
        copy.cells[cell.index()] = mark;
        copy
    }

    /// Empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&c| self.is_open(c)).collect()
    }

    /// Return `true` if no cell is open.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// The marks along one of the [`LINES`].
    #[inline]
    pub fn line(&self, line: &[Cell; 3]) -> [Mark; 3] {
        [self.get(line[0]), self.get(line[1]), self.get(line[2])]
    }

    /// Canonical key for caching heuristic values.
    pub fn key(&self) -> BlockKey {
        let packed = self
            .cells
            .iter()
            .rev()
            .fold(0u16, |acc, m| acc * Mark::COUNT as u16 + m.index() as u16);
        BlockKey(packed)
    }

    /// The block as three text rows, e.g. `" X | - | O "`.
    pub fn rows(&self) -> [String; 3] {
        std::array::from_fn(|row| {
            (0..3)
                .map(|col| format!(" {} ", self.cells[row * 3 + col]))
                .collect::<Vec<_>>()
                .join("|")
        })
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.cells.iter().map(|m| m.symbol()).collect();
        write!(f, "Block(\"{s}\")")
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.rows();
        write!(f, "{a}\n{b}\n{c}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(n: u8) -> Cell {
        Cell::new(n).unwrap()
    }

    #[test]
    fn new_block_is_empty() {
        let block = Block::new();
        assert_eq!(block.empty_cells().len(), 9);
        assert!(!block.is_full());
    }

    #[test]
    fn empty_cells_list() {
        let mut block = Block::new();
        block.place(cell(4), Mark::O).unwrap();
        block.place(cell(8), Mark::X).unwrap();
        block.place(cell(1), Mark::O).unwrap();
        let numbers: Vec<u8> = block.empty_cells().into_iter().map(Cell::number).collect();
        assert_eq!(numbers, vec![2, 3, 5, 6, 7, 9]);
    }

    #[test]
    fn place_on_occupied_fails() {
        let mut block = Block::new();
        block.place(cell(5), Mark::X).unwrap();
        let err = block.place(cell(5), Mark::O).unwrap_err();
        assert!(matches!(err, CoreError::Occupied { cell: 5, occupant: Mark::X }));
        assert_eq!(block.get(cell(5)), Mark::X);
    }

    #[test]
    fn place_empty_mark_fails() {
        let mut block = Block::new();
        assert!(matches!(block.place(cell(1), Mark::Empty), Err(CoreError::EmptyMover)));
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let block = Block::new();
        let next = block.with_mark(cell(3), Mark::O);
        assert!(block.is_open(cell(3)));
        assert_eq!(next.get(cell(3)), Mark::O);
    }

    #[test]
    fn key_ignores_move_order() {
        let mut a = Block::new();
        a.place(cell(1), Mark::X).unwrap();
        a.place(cell(5), Mark::O).unwrap();
        a.place(cell(9), Mark::X).unwrap();

        let mut b = Block::new();
        b.place(cell(9), Mark::X).unwrap();
        b.place(cell(1), Mark::X).unwrap();
        b.place(cell(5), Mark::O).unwrap();

        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn key_distinguishes_marks() {
        let x = Block::new().with_mark(cell(1), Mark::X);
        let o = Block::new().with_mark(cell(1), Mark::O);
        assert_ne!(x.key(), o.key());
        assert_ne!(x.key(), Block::new().key());
        assert_eq!(Block::new().key().0, 0);
    }

    #[test]
    fn key_fits_in_range() {
        let mut full = Block::new();
        for c in Cell::all() {
            full.place(c, Mark::O).unwrap();
        }
        // 3^9 - 1
        assert_eq!(full.key().0, 19_682);
        assert!(full.is_full());
    }

    #[test]
    fn lines_cover_every_cell() {
        let mut hits = [0; 9];
        for line in &LINES {
            for c in line {
                hits[c.index()] += 1;
            }
        }
        // corners on 3 lines, edges on 2, centre on 4
        assert_eq!(hits, [3, 2, 3, 2, 4, 2, 3, 2, 3]);
    }

    #[test]
    fn display_rows() {
        let block = Block::new()
            .with_mark(cell(1), Mark::X)
            .with_mark(cell(3), Mark::O);
        let rendered = format!("{block}");
        assert_eq!(rendered.lines().next().unwrap(), " X | - | O ");
        assert_eq!(rendered.lines().count(), 3);
    }
}
