//! Per-marker and per-player legal move generation.

use crate::board::{Board, Field, Move};

/// Generates all legal moves for the marker at `source`, in increasing
/// destination order.
///
/// Returns an empty vec if `source` is empty or out of range.
pub fn moves_from(board: &Board, source: usize) -> Vec<Move> {
    match board.get(source) {
        Some(p) if !p.is_empty() => {}
        _ => return Vec::new(),
    }

    (0..board.size())
        .filter(|&destination| destination != source)
        .map(|destination| Move::new(source, destination))
        .filter(|mv| board.invalid_move(mv).is_none())
        .collect()
}

/// Generates all legal moves for every marker of `field`, ordered by source
/// and then destination.
///
/// Returns an empty vec for `Field::Empty`.
pub fn moves_for(board: &Board, field: Field) -> Vec<Move> {
    if field.is_empty() {
        return Vec::new();
    }

    let mut moves = Vec::new();
    for i in 0..board.size() {
        if board[i].field() != field {
            continue;
        }
        moves.extend(moves_from(board, i));
    }
    moves
}
