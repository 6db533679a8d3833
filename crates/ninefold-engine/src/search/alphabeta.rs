//! Depth-bounded alpha-beta minimax.

use ninefold_core::{GameState, Mark};

use crate::eval::cache::EvaluationCache;
use crate::eval::{TERMINAL_THRESHOLD, evaluate, evaluate_board};
use crate::search::control::SearchControl;
use crate::search::ordering::legal_moves;

/// Lower seed for the search window.
pub const NEG_INF: i32 = i32::MIN;

/// Upper seed for the search window.
pub const INF: i32 = i32::MAX;

/// Search state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    /// The maximizing side.
    pub me: Mark,
    /// Block value cache for `me`.
    pub cache: &'a mut EvaluationCache,
    /// Stop flag and time limit.
    pub control: &'a SearchControl,
}

/// Minimax value of `state` searched `depth` plies deep.
///
/// Nodes where `me` is to move maximize, the others minimize. Fail-hard: a
/// maximizing node never returns less than the `alpha` it was given, a
/// minimizing node never more than `beta`. With the full `NEG_INF..INF`
/// window the result is the exact minimax value.
///
/// When the control says stop, returns 0; the caller must discard it.
pub(super) fn alpha_beta(
    state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    if ctx.control.should_stop(ctx.nodes) {
        return 0;
    }

    // Game over: the block just played holds a completed line
    if let Some(last) = state.last_block_played() {
        let value = evaluate(state.block(last), ctx.cache);
        if value.abs() >= TERMINAL_THRESHOLD {
            return value;
        }
    }

    if depth == 0 {
        return evaluate_board(state, ctx.cache);
    }

    let moves = legal_moves(state, ctx.cache);

    // Sent into a full block: nobody can move, score the board as it stands
    if moves.is_empty() {
        return evaluate_board(state, ctx.cache);
    }

    if state.to_move() == ctx.me {
        for mv in moves {
            let child = state.make_move(mv);
            let value = alpha_beta(&child, depth - 1, alpha, beta, ctx);
            alpha = alpha.max(value);
            if alpha >= beta {
                return alpha;
            }
        }
        alpha
    } else {
        for mv in moves {
            let child = state.make_move(mv);
            let value = alpha_beta(&child, depth - 1, alpha, beta, ctx);
            beta = beta.min(value);
            if beta <= alpha {
                return beta;
            }
        }
        beta
    }
}
