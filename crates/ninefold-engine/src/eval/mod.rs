//! Block and board evaluation.
//!
//! All values are from the cache's perspective mark: positive favours it.

pub mod cache;
pub mod lines;

use ninefold_core::{Block, GameState};

use cache::EvaluationCache;
use lines::score_block;

/// Block values at or beyond this magnitude mean a line was completed.
pub const TERMINAL_THRESHOLD: i32 = 100;

/// Heuristic value of `block`, memoized in `cache`.
///
/// A cache hit returns without scanning any line.
pub fn evaluate(block: &Block, cache: &mut EvaluationCache) -> i32 {
    let key = block.key();
    if let Some(value) = cache.probe(key) {
        return value;
    }
    let value = score_block(block, cache.perspective());
    cache.store(key, value);
    value
}

/// Static whole-board value: the sum of all nine block values.
pub fn evaluate_board(state: &GameState, cache: &mut EvaluationCache) -> i32 {
    state.blocks().map(|(_, block)| evaluate(block, cache)).sum()
}

/// Whether the game is over.
///
/// A completed line in the block just played ends the whole game in this
/// variant; there is no meta-board of won blocks.
pub fn is_terminal(state: &GameState, cache: &mut EvaluationCache) -> bool {
    state
        .last_block_played()
        .is_some_and(|b| evaluate(state.block(b), cache).abs() >= TERMINAL_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use ninefold_core::{Cell, Mark, Move};

    use super::*;

    const A: Mark = Mark::X;
    const B: Mark = Mark::O;

    fn cell(n: u8) -> Cell {
        Cell::new(n).unwrap()
    }

    /// Play `moves` on an empty block and return the value after each one.
    fn ramp(moves: &[(u8, Mark)]) -> Vec<i32> {
        let mut cache = EvaluationCache::new(A);
        let mut block = Block::new();
        moves
            .iter()
            .map(|&(n, mark)| {
                block.place(cell(n), mark).unwrap();
                evaluate(&block, &mut cache)
            })
            .collect()
    }

    #[test]
    fn long_game_ending_in_opponent_win() {
        let values = ramp(&[
            (1, A),
            (2, B),
            (4, A),
            (5, B),
            (6, A),
            (3, B),
            (9, A),
            (7, B),
        ]);
        assert_eq!(values, vec![3, 1, 21, -1, 0, -20, -19, -220]);
    }

    #[test]
    fn short_game_with_player_win() {
        let values = ramp(&[(1, A), (8, B), (5, A), (7, B), (9, A)]);
        assert_eq!(values[1..], [1, 23, 2, 203]);
    }

    #[test]
    fn opponent_wins_vertically() {
        let values = ramp(&[(3, A), (1, B), (8, A), (7, B), (6, A), (4, B)]);
        assert_eq!(*values.last().unwrap(), -180);
    }

    #[test]
    fn deterministic_and_cached() {
        let mut cache = EvaluationCache::new(A);
        let block = Block::new()
            .with_mark(cell(3), A)
            .with_mark(cell(1), B)
            .with_mark(cell(8), A);

        let first = evaluate(&block, &mut cache);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 0);

        let second = evaluate(&block, &mut cache);
        assert_eq!(first, second);
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn cached_value_short_circuits_scan() {
        let mut cache = EvaluationCache::new(A);
        let block = Block::new().with_mark(cell(5), A);
        cache.store(block.key(), 999);
        assert_eq!(evaluate(&block, &mut cache), 999);
    }

    #[test]
    fn move_order_shares_one_entry() {
        let mut cache = EvaluationCache::new(A);
        let a = Block::new()
            .with_mark(cell(3), A)
            .with_mark(cell(1), B)
            .with_mark(cell(6), A)
            .with_mark(cell(4), B);
        let b = Block::new()
            .with_mark(cell(4), B)
            .with_mark(cell(6), A)
            .with_mark(cell(1), B)
            .with_mark(cell(3), A);

        let va = evaluate(&a, &mut cache);
        let vb = evaluate(&b, &mut cache);
        assert_eq!(va, vb);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn empty_board_is_zero() {
        let mut cache = EvaluationCache::new(A);
        assert_eq!(evaluate_board(&GameState::new(), &mut cache), 0);
        assert!(!is_terminal(&GameState::new(), &mut cache));
    }

    #[test]
    fn board_value_sums_blocks() {
        let mut cache = EvaluationCache::new(A);
        let mut state = GameState::new();
        state.apply(A, Move::from_numbers(1, 5).unwrap()).unwrap();
        state.apply(B, Move::from_numbers(5, 1).unwrap()).unwrap();
        // centre X in block 1 (+4), corner O in block 5 (-3)
        assert_eq!(evaluate_board(&state, &mut cache), 1);
    }

    #[test]
    fn completed_line_in_last_block_is_terminal() {
        let mut cache = EvaluationCache::new(A);
        let mut state = GameState::new();
        for (mark, b, c) in [(A, 1, 1), (B, 1, 4), (A, 4, 1), (B, 1, 2), (A, 2, 1), (B, 1, 3)] {
            state.apply(mark, Move::from_numbers(b, c).unwrap()).unwrap();
        }
        // block 1 has X on 1 and O on 4, 2, 3: no line yet
        assert!(!is_terminal(&state, &mut cache));

        let mut state = GameState::new();
        for (mark, b, c) in [(A, 5, 1), (B, 1, 5), (A, 5, 2), (B, 2, 5), (A, 5, 3)] {
            state.apply(mark, Move::from_numbers(b, c).unwrap()).unwrap();
        }
        assert!(is_terminal(&state, &mut cache));
    }
}
