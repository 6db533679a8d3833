//! Choosing a move without search.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use ninefold_core::Move;

/// Picks one move from a list of legal moves.
///
/// Used for the first move of a game, where search has nothing to go on.
/// Any `FnMut(&[Move]) -> Option<Move>` closure is a picker, so callers can
/// swap in a deterministic choice.
pub trait CellPicker {
    /// Choose one of `moves`, or `None` if the list is empty.
    fn pick(&mut self, moves: &[Move]) -> Option<Move>;
}

impl<F> CellPicker for F
where
    F: FnMut(&[Move]) -> Option<Move>,
{
    fn pick(&mut self, moves: &[Move]) -> Option<Move> {
        self(moves)
    }
}

/// Uniformly random choice.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Seed from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CellPicker for RandomPicker {
    fn pick(&mut self, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.rng).copied()
    }
}
