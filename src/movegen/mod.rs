//! Legal move generation.
//!
//! Enumerates legal moves per marker or per player and picks random legal
//! moves for the driver's `go` command. No move is ever evaluated.

pub mod movement;

pub use movement::{moves_for, moves_from};

use rand::Rng;

use crate::board::{Board, Field, Move};

/// Picks a uniformly random legal move.
///
/// With `Some(field)` only that player's markers are considered; with `None`
/// every marker is. Returns `None` if there is no legal move.
pub fn random_move(board: &Board, field: Option<Field>, rng: &mut impl Rng) -> Option<Move> {
    let legal = match field {
        Some(f) => moves_for(board, f),
        None => board.possible_moves(),
    };
    if legal.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..legal.len());
    Some(legal[idx])
}
