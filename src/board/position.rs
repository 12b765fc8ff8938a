//! A single addressable position on the board graph.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::field::Field;

/// A position snapshot: an immutable index plus the field it held when read.
///
/// Equality, ordering and hashing look at the index only. Two snapshots of the
/// same position taken before and after a move compare equal, which keeps
/// visited-set bookkeeping independent of occupancy.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    index: usize,
    field: Field,
}

impl Position {
    /// Creates a position with the given index and field.
    pub const fn new(index: usize, field: Field) -> Self {
        Self { index, field }
    }

    /// Creates an empty position.
    pub const fn empty(index: usize) -> Self {
        Self::new(index, Field::Empty)
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn field(&self) -> Field {
        self.field
    }

    pub const fn is_empty(&self) -> bool {
        self.field.is_empty()
    }

    pub(crate) fn set_field(&mut self, field: Field) {
        self.field = field;
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}
