//! Occupancy state of a single board position.

use serde::{Deserialize, Serialize};

/// What a position currently holds: nothing, or one player's marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Field {
    /// Returns true if no marker occupies the position.
    pub const fn is_empty(self) -> bool {
        matches!(self, Field::Empty)
    }

    /// Returns the single-character symbol used in renderings and field strings.
    pub const fn symbol(self) -> char {
        match self {
            Field::Empty => '.',
            Field::PlayerA => 'A',
            Field::PlayerB => 'B',
        }
    }

    /// Parses a field from its single-character symbol.
    pub fn from_symbol(c: char) -> Option<Field> {
        match c {
            '.' => Some(Field::Empty),
            'A' => Some(Field::PlayerA),
            'B' => Some(Field::PlayerB),
            _ => None,
        }
    }
}
