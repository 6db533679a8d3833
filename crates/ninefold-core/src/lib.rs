//! Core nested tic-tac-toe types: marks, cells, blocks, moves, and game state.

mod block;
mod cell;
mod error;
mod game;
mod game_move;
mod mark;

pub use block::{Block, BlockKey, LINES};
pub use cell::Cell;
pub use error::CoreError;
pub use game::{GameState, PrettyGame};
pub use game_move::Move;
pub use mark::Mark;
