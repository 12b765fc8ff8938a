//! Text notation for moves, fields and board setups.
//!
//! Moves are written `<source>-<destination>` (e.g. `2-5`), move lists are
//! space separated, and a board's occupancy is one field symbol per position
//! (e.g. `AAAA....BBBB`). Setups are single-line JSON objects:
//!
//! ```text
//! {"adjacency":[[1],[0,2],[1]],"player_a":[0],"player_b":[2]}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Adjacency, Board, BoardError, Move};

/// Errors that can occur when parsing notation strings.
#[derive(Debug, Error)]
pub enum NotationError {
    #[error("empty input")]
    EmptyInput,

    #[error("expected '<source>-<destination>', got '{0}'")]
    MissingSeparator(String),

    #[error("invalid position index '{0}'")]
    InvalidIndex(String),

    #[error("invalid setup: {0}")]
    Setup(#[from] serde_json::Error),
}

/// A board description: adjacency plus initial placements for both players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    pub adjacency: Adjacency,
    #[serde(default)]
    pub player_a: Vec<usize>,
    #[serde(default)]
    pub player_b: Vec<usize>,
}

impl Setup {
    /// Builds the board this setup describes.
    pub fn into_board(self) -> Result<Board, BoardError> {
        Board::try_new(self.adjacency, &self.player_a, &self.player_b)
    }
}

/// Parses a position index.
pub fn parse_index(s: &str) -> Result<usize, NotationError> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| NotationError::InvalidIndex(s.to_string()))
}

/// Parses a single move such as `2-5`.
pub fn parse_move(s: &str) -> Result<Move, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    let (source, destination) = s
        .split_once('-')
        .ok_or_else(|| NotationError::MissingSeparator(s.to_string()))?;
    Ok(Move::new(parse_index(source)?, parse_index(destination)?))
}

/// Formats moves as a space-separated list.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Encodes the board's occupancy as one symbol per position.
pub fn format_fields(board: &Board) -> String {
    (0..board.size()).map(|i| board[i].field().symbol()).collect()
}

/// Parses a JSON setup line.
pub fn parse_setup(s: &str) -> Result<Setup, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::EmptyInput);
    }
    Ok(serde_json::from_str(s)?)
}
