//! The board graph: adjacency plus per-position occupancy.
//!
//! Holds the fixed adjacency relation and the mutable field of every
//! position, and answers reachability and move-legality questions.

use std::collections::VecDeque;
use std::ops::Index;

use thiserror::Error;
use tracing::{debug, trace};

use super::adjacency::{check_adjacency, Adjacency};
use super::field::Field;
use super::moves::Move;
use super::position::Position;

/// Errors raised while building a board from an adjacency description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {position} lists neighbor {neighbor}, but the board has only {size} positions")]
    NeighborOutOfRange {
        position: usize,
        neighbor: usize,
        size: usize,
    },

    #[error("initial position {index} is out of range for a board of {size} positions")]
    PlacementOutOfRange { index: usize, size: usize },

    #[error("position {0} is listed for both players")]
    OverlappingPlacement(usize),
}

/// Why a move is not legal on the current board.
///
/// Checks run in declaration order and stop at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MoveError {
    #[error("source field is empty")]
    SourceEmpty,

    #[error("destination field is not empty")]
    DestinationOccupied,

    #[error("unreachable destination")]
    Unreachable,
}

/// A board graph with a fixed adjacency relation and mutable occupancy.
///
/// Position `i` takes its neighbors from adjacency entry `i`.
#[derive(Debug, Clone)]
pub struct Board {
    adjacency: Adjacency,
    positions: Vec<Position>,
}

impl Board {
    /// Builds a board, placing player A and player B markers at the given
    /// indices. Every other position starts empty.
    ///
    /// # Panics
    ///
    /// Panics if the description is rejected by [`Board::try_new`]. A bad
    /// description is a caller bug.
    pub fn new(adjacency: Adjacency, player_a: &[usize], player_b: &[usize]) -> Self {
        match Self::try_new(adjacency, player_a, player_b) {
            Ok(board) => board,
            Err(e) => panic!("invalid board description: {}", e),
        }
    }

    /// Builds a board, rejecting out-of-range neighbor or placement indices and
    /// positions listed for both players.
    pub fn try_new(
        adjacency: Adjacency,
        player_a: &[usize],
        player_b: &[usize],
    ) -> Result<Self, BoardError> {
        check_adjacency(&adjacency)?;
        let size = adjacency.len();

        let mut positions: Vec<Position> = (0..size).map(Position::empty).collect();
        for (placements, field) in [(player_a, Field::PlayerA), (player_b, Field::PlayerB)] {
            for &index in placements {
                let position = positions
                    .get_mut(index)
                    .ok_or(BoardError::PlacementOutOfRange { index, size })?;
                if !position.is_empty() && position.field() != field {
                    return Err(BoardError::OverlappingPlacement(index));
                }
                position.set_field(field);
            }
        }

        Ok(Board { adjacency, positions })
    }

    /// Returns the number of positions.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns a snapshot of the position at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Position> {
        self.positions.get(index).copied()
    }

    /// Returns the adjacency description the board was built from.
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Returns snapshots of the neighbors of `position`, in adjacency order.
    ///
    /// Fields reflect the current board, not the field stored in `position`.
    pub fn node_neighbors(&self, position: &Position) -> Vec<Position> {
        self.adjacency[position.index()]
            .iter()
            .map(|&n| self.positions[n])
            .collect()
    }

    /// Returns true if `end` is reachable from `start` through positions
    /// accepted by `predicate`.
    ///
    /// The predicate is applied to neighbors being considered for the queue,
    /// never to the start position. The target check on the queue front runs
    /// before anything else, so `start == end` is always reachable.
    pub fn breadth_first_search<P>(&self, start: usize, end: usize, mut predicate: P) -> bool
    where
        P: FnMut(&Position) -> bool,
    {
        let mut visited = vec![false; self.size()];
        let mut queue = VecDeque::with_capacity(self.size());
        visited[start] = true;
        queue.push_back(self.positions[start]);

        while let Some(&front) = queue.front() {
            if front.index() == end {
                trace!(start, end, "target reached");
                return true;
            }
            queue.pop_front();

            for &n in &self.adjacency[front.index()] {
                if visited[n] {
                    continue;
                }
                let neighbor = self.positions[n];
                if predicate(&neighbor) {
                    visited[n] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        trace!(start, end, "target unreachable");
        false
    }

    /// Returns why `mv` is illegal, or `None` if it may be played.
    ///
    /// A legal move starts on a marker, ends on an empty position, and the
    /// destination is reachable through empty positions only.
    pub fn invalid_move(&self, mv: &Move) -> Option<MoveError> {
        if self.positions[mv.source].is_empty() {
            return Some(MoveError::SourceEmpty);
        }
        if !self.positions[mv.destination].is_empty() {
            return Some(MoveError::DestinationOccupied);
        }
        if !self.breadth_first_search(mv.source, mv.destination, Position::is_empty) {
            return Some(MoveError::Unreachable);
        }
        None
    }

    /// Plays `mv`: the destination takes the source's marker and the source
    /// becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is not legal. Callers check with [`Board::invalid_move`]
    /// first.
    pub fn do_move(&mut self, mv: &Move) {
        if let Some(e) = self.invalid_move(mv) {
            panic!("illegal move {}: {}", mv, e);
        }
        let field = self.positions[mv.source].field();
        self.positions[mv.destination].set_field(field);
        self.positions[mv.source].set_field(Field::Empty);
        debug!(%mv, ?field, "move played");
    }

    /// Returns every legal move, ordered by source and then destination.
    pub fn possible_moves(&self) -> Vec<Move> {
        let n = self.size();
        let moves: Vec<Move> = (0..n)
            .flat_map(|source| {
                (0..n)
                    .filter(move |&destination| destination != source)
                    .map(move |destination| Move::new(source, destination))
            })
            .filter(|mv| self.invalid_move(mv).is_none())
            .collect();
        debug!(count = moves.len(), "enumerated legal moves");
        moves
    }
}

impl Index<usize> for Board {
    type Output = Position;

    fn index(&self, index: usize) -> &Position {
        &self.positions[index]
    }
}

/// Label-sensitive equality: same adjacency lists and the same field at every index.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
            && self
                .positions
                .iter()
                .zip(&other.positions)
                .all(|(a, b)| a.field() == b.field())
    }
}

impl Eq for Board {}
