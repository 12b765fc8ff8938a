//! Board representation.
//!
//! Contains the position and move value types, adjacency descriptions, and
//! the board graph that validates and plays moves.

pub mod adjacency;
pub mod field;
pub mod graph;
pub mod moves;
pub mod position;

pub use adjacency::{
    check_adjacency, is_symmetric, ladder, ladder_board, Adjacency, LADDER_PLAYER_A,
    LADDER_PLAYER_B, LADDER_SIZE,
};
pub use field::Field;
pub use graph::{Board, BoardError, MoveError};
pub use moves::Move;
pub use position::Position;
