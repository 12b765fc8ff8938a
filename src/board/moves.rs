//! Move values.
//!
//! A move only names two indices. Whether it is legal depends on the board it
//! is played on, see `Board::invalid_move`.

use std::fmt;

/// A proposed transfer of a marker from `source` to `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: usize,
    pub destination: usize,
}

impl Move {
    pub const fn new(source: usize, destination: usize) -> Self {
        Self { source, destination }
    }

    /// Returns the move with source and destination swapped.
    pub const fn inverse(self) -> Self {
        Self::new(self.destination, self.source)
    }

    /// Returns true if `other` undoes this move.
    ///
    /// A move from a position to itself is its own inverse.
    pub fn is_inverse(&self, other: &Move) -> bool {
        self.inverse() == *other
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.destination)
    }
}
