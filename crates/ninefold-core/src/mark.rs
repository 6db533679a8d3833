//! Cell occupants: the two players and the empty mark.

use std::fmt;
use std::ops::Not;

use crate::error::CoreError;

/// What occupies a cell: player X, player O, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Mark {
    #[default]
    Empty = 0,
    X = 1,
    O = 2,
}

impl Mark {
    /// Number of distinct marks (the base used for block keys).
    pub const COUNT: usize = 3;

    /// The two marks that can move.
    pub const PLAYERS: [Mark; 2] = [Mark::X, Mark::O];

    /// Return the digit used when packing a block key.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the other player. `Empty` stays `Empty`.
    #[inline]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Parse the arbiter's symbol for a player (`x` or `o`, any case).
    pub fn from_symbol(symbol: char) -> Result<Mark, CoreError> {
        match symbol.to_ascii_lowercase() {
            'x' => Ok(Mark::X),
            'o' => Ok(Mark::O),
            _ => Err(CoreError::InvalidMark { symbol }),
        }
    }

    /// Character used when printing a block.
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '-',
        }
    }
}

impl Not for Mark {
    type Output = Mark;

    #[inline]
    fn not(self) -> Mark {
        self.opponent()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
