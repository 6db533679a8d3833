//! Move ordering by one-ply block evaluation.
//!
//! Each empty cell is tried on a copy of the block, the copy is evaluated,
//! and the cell is inserted into a list kept in descending value order.
//! Equal values keep encounter order. This looks no further ahead than the
//! block itself; it only exists to make alpha-beta cut earlier.

use ninefold_core::{Block, Cell, GameState, Mark, Move};

use crate::eval::cache::EvaluationCache;
use crate::eval::evaluate;

/// Empty cells of `block`, best first for the cache's perspective after `mover` plays there.
pub fn ordered_candidates(block: &Block, mover: Mark, cache: &mut EvaluationCache) -> Vec<Cell> {
    let mut ordered: Vec<(Cell, i32)> = Vec::with_capacity(Cell::COUNT);

    for cell in block.empty_cells() {
        let value = evaluate(&block.with_mark(cell, mover), cache);
        let at = ordered
            .iter()
            .position(|&(_, v)| value > v)
            .unwrap_or(ordered.len());
        ordered.insert(at, (cell, value));
    }

    ordered.into_iter().map(|(cell, _)| cell).collect()
}

/// Legal moves for the side to move, ordered.
///
/// With an active block this is [`ordered_candidates`] of that block. Before
/// the first move every block is open; each is ordered separately and the
/// lists are concatenated in block order.
pub fn legal_moves(state: &GameState, cache: &mut EvaluationCache) -> Vec<Move> {
    let mover = state.to_move();
    match state.active_block() {
        Some(b) => ordered_candidates(state.block(b), mover, cache)
            .into_iter()
            .map(|cell| Move::new(b, cell))
            .collect(),
        None => Cell::all()
            .flat_map(|b| {
                ordered_candidates(state.block(b), mover, cache)
                    .into_iter()
                    .map(move |cell| Move::new(b, cell))
            })
            .collect(),
    }
}
