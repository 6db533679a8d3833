//! Arbiter protocol handling for ninefold.

pub mod error;
pub mod message;
pub mod session;

pub use error::ClientError;
pub use message::{Message, Outcome, parse_message};
pub use session::{Session, SessionConfig};
