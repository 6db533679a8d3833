//! The full nine-block board: blocks, active block, and side to move.

use std::fmt;

use tracing::trace;

use crate::block::Block;
use crate::cell::Cell;
use crate::error::CoreError;
use crate::game_move::Move;
use crate::mark::Mark;

/// Complete game position.
///
/// Owns its nine blocks outright. [`make_move`](GameState::make_move) and
/// [`with_move`](GameState::with_move) return an independent copy, so search
/// branches never share mutable state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Blocks indexed by [`Cell::index()`].
    blocks: [Block; Cell::COUNT],
    /// Block the side to move must play in; `None` before the first move.
    active_block: Option<Cell>,
    /// Block the previous move was made in.
    last_block_played: Option<Cell>,
    /// Which side moves next.
    to_move: Mark,
}

impl GameState {
    /// An empty board with X to move and no block constraint.
    pub fn new() -> GameState {
        GameState {
            blocks: [Block::EMPTY; Cell::COUNT],
            active_block: None,
            last_block_played: None,
            to_move: Mark::X,
        }
    }

    /// Assemble a position from its parts.
    ///
    /// No consistency checks: the caller vouches that the position is reachable.
    pub fn from_parts(
        blocks: [Block; Cell::COUNT],
        active_block: Option<Cell>,
        last_block_played: Option<Cell>,
        to_move: Mark,
    ) -> GameState {
        GameState {
            blocks,
            active_block,
            last_block_played,
            to_move,
        }
    }

    /// Return the block at `index`.
    #[inline]
    pub fn block(&self, index: Cell) -> &Block {
        &self.blocks[index.index()]
    }

    /// Iterate over the nine blocks in order.
    pub fn blocks(&self) -> impl Iterator<Item = (Cell, &Block)> {
        Cell::all().zip(self.blocks.iter())
    }

    /// The block the side to move must play in, if any.
    #[inline]
    pub fn active_block(&self) -> Option<Cell> {
        self.active_block
    }

    /// The block the previous move was made in, if any.
    #[inline]
    pub fn last_block_played(&self) -> Option<Cell> {
        self.last_block_played
    }

    /// The side to move.
    #[inline]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Number of `mark` stones on the whole board.
    pub fn count(&self, mark: Mark) -> usize {
        self.blocks
            .iter()
            .flat_map(|b| Cell::all().map(move |c| b.get(c)))
            .filter(|&m| m == mark)
            .count()
    }

    /// Legal moves for the side to move, in block then cell order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let in_block = |b: Cell| {
            self.block(b)
                .empty_cells()
                .into_iter()
                .map(move |c| Move::new(b, c))
        };
        match self.active_block {
            Some(b) => in_block(b).collect(),
            None => Cell::all().flat_map(in_block).collect(),
        }
    }

    /// Check whether `mv` is legal for the side to move.
    pub fn check(&self, mv: Move) -> Result<(), CoreError> {
        if let Some(active) = self.active_block
            && active != mv.block
        {
            return Err(CoreError::WrongBlock {
                expected: active.number(),
                found: mv.block.number(),
            });
        }
        let occupant = self.block(mv.block).get(mv.cell);
        if !occupant.is_empty() {
            return Err(CoreError::Occupied {
                cell: mv.cell.number(),
                occupant,
            });
        }
        Ok(())
    }

    /// Play `mv` for `mark` in place, validating it first.
    ///
    /// The mover is explicit because moves arrive from the arbiter and are
    /// attributed by the protocol, not by turn order. On success the active
    /// block becomes `mv.cell` and the turn passes to `mark`'s opponent.
    pub fn apply(&mut self, mark: Mark, mv: Move) -> Result<(), CoreError> {
        if mark.is_empty() {
            return Err(CoreError::EmptyMover);
        }
        self.check(mv)?;
        self.blocks[mv.block.index()].place(mv.cell, mark)?;
        self.active_block = Some(mv.cell);
        self.last_block_played = Some(mv.block);
        self.to_move = mark.opponent();
        trace!(%mark, %mv, "move applied");
        Ok(())
    }

    /// Return a validated copy with `mv` played by `mark`.
    pub fn with_move(&self, mark: Mark, mv: Move) -> Result<GameState, CoreError> {
        let mut child = *self;
        child.apply(mark, mv)?;
        Ok(child)
    }

    /// Return a copy with `mv` played by the side to move.
    ///
    /// For moves taken from the legal-move list; legality is only
    /// debug-asserted.
    pub fn make_move(&self, mv: Move) -> GameState {
        debug_assert!(self.check(mv).is_ok(), "illegal move {mv} in make_move");
        let mut child = *self;
        let mover = child.to_move;
        child.blocks[mv.block.index()] = child.blocks[mv.block.index()].with_mark(mv.cell, mover);
        child.active_block = Some(mv.cell);
        child.last_block_played = Some(mv.block);
        child.to_move = mover.opponent();
        child
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyGame<'_> {
        PrettyGame(self)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("blocks", &self.blocks)
            .field("active_block", &self.active_block)
            .field("last_block_played", &self.last_block_played)
            .field("to_move", &self.to_move)
            .finish()
    }
}

/// Wrapper for printing the board as a 9x9 grid.
pub struct PrettyGame<'a>(&'a GameState);

impl fmt::Display for PrettyGame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let game = self.0;
        for block_row in 0..3 {
            if block_row > 0 {
                writeln!(f, "{}", "-".repeat(35))?;
            }
            let rows: Vec<[String; 3]> = (0..3)
                .map(|block_col| game.blocks[block_row * 3 + block_col].rows())
                .collect();
            for line in 0..3 {
                let joined: Vec<&str> = rows.iter().map(|r| r[line].as_str()).collect();
                writeln!(f, "{}", joined.join(" || "))?;
            }
        }
        match game.active_block {
            Some(b) => write!(f, "{} to move in block {b}", game.to_move),
            None => write!(f, "{} to move anywhere", game.to_move),
        }
    }
}
