//! Adjacency descriptions and the built-in ladder topology.
//!
//! An adjacency description lists, for each position index, the ordered
//! indices of its neighbors. Edges are directed: an entry `a -> b` does not
//! imply `b -> a`, although every built-in topology is symmetric.

use super::graph::{Board, BoardError};

/// Neighbor lists indexed by position. Entry `i` holds the neighbors of position `i`.
pub type Adjacency = Vec<Vec<usize>>;

/// Number of positions on the ladder board.
pub const LADDER_SIZE: usize = 12;

/// Initial player A markers on the ladder board.
pub const LADDER_PLAYER_A: [usize; 4] = [0, 1, 2, 3];

/// Initial player B markers on the ladder board.
pub const LADDER_PLAYER_B: [usize; 4] = [8, 9, 10, 11];

/// Returns the 12-position ladder topology.
///
/// A spine `0-1-2-4-5-7-8-10-11` with three single-position spurs:
/// 3 hangs off 2, 6 off 5, and 9 off 8.
pub fn ladder() -> Adjacency {
    vec![
        vec![1],
        vec![0, 2],
        vec![1, 3, 4],
        vec![2],
        vec![2, 5],
        vec![4, 6, 7],
        vec![5],
        vec![5, 8],
        vec![7, 9, 10],
        vec![8],
        vec![8, 11],
        vec![10],
    ]
}

/// Returns the ladder board with both players in their starting positions.
pub fn ladder_board() -> Board {
    Board::new(ladder(), &LADDER_PLAYER_A, &LADDER_PLAYER_B)
}

/// Checks that every neighbor index refers to an existing position.
///
/// Self-loops and repeated neighbors are allowed.
pub fn check_adjacency(adjacency: &Adjacency) -> Result<(), BoardError> {
    let size = adjacency.len();
    for (position, neighbors) in adjacency.iter().enumerate() {
        if let Some(&neighbor) = neighbors.iter().find(|&&n| n >= size) {
            return Err(BoardError::NeighborOutOfRange { position, neighbor, size });
        }
    }
    Ok(())
}

/// Returns true if every edge `a -> b` has a matching edge `b -> a`.
///
/// Out-of-range neighbors make the description asymmetric.
pub fn is_symmetric(adjacency: &Adjacency) -> bool {
    adjacency.iter().enumerate().all(|(from, neighbors)| {
        neighbors.iter().all(|&to| {
            adjacency
                .get(to)
                .map_or(false, |back| back.contains(&from))
        })
    })
}
