//! Evaluation, search, and move selection for ninefold.

pub mod eval;
pub mod opening;
pub mod player;
pub mod schedule;
pub mod search;

mod error;

pub use error::PlayerError;
pub use eval::cache::EvaluationCache;
pub use eval::{TERMINAL_THRESHOLD, evaluate, evaluate_board, is_terminal};
pub use opening::{CellPicker, RandomPicker};
pub use player::Player;
pub use schedule::depth_for_move_index;
pub use search::control::SearchControl;
pub use search::{SearchConfig, SearchEngine, SearchResult};
