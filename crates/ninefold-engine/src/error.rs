//! Player errors.

use ninefold_core::CoreError;

/// Errors from driving a [`Player`](crate::Player) through a game.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    /// A move or query arrived before `initiate_game`.
    #[error("no game in progress")]
    NotStarted,

    /// A reply arrived but no block is active yet.
    #[error("opponent reply with no active block")]
    NoActiveBlock,

    /// The active block is full.
    #[error("no legal move available")]
    NoLegalMove,

    /// The move was rejected by the board.
    #[error(transparent)]
    Core(#[from] CoreError),
}
