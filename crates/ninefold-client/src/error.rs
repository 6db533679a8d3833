//! Client errors.

use ninefold_core::CoreError;
use ninefold_engine::PlayerError;

/// Errors that can occur while talking to the arbiter.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A recognized message carried arguments that could not be parsed.
    #[error("malformed message {line:?}: {reason}")]
    MalformedMessage {
        /// The offending line.
        line: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The board rejected a mark or move.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The player could not apply or produce a move.
    #[error(transparent)]
    Player(#[from] PlayerError),

    /// Could not reach the arbiter.
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        /// Address that was tried.
        addr: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Reading from or writing to the connection failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Whether this error only spoils one message and the session can carry on.
    ///
    /// Malformed lines and illegal opponent moves are dropped. A bad mark in
    /// `start`, having no legal move of our own, and connection failures end
    /// the session.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::MalformedMessage { .. } => true,
            ClientError::Core(CoreError::InvalidMark { .. }) => false,
            ClientError::Core(_) => true,
            ClientError::Player(PlayerError::NoLegalMove) => false,
            ClientError::Player(PlayerError::Core(CoreError::InvalidMark { .. })) => false,
            ClientError::Player(_) => true,
            ClientError::Connect { .. } | ClientError::Io { .. } => false,
        }
    }
}
