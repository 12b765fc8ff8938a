//! Driver session state.
//!
//! Holds the current board, driver options and the move-picking RNG, and
//! writes protocol responses for each command.

use std::collections::HashMap;
use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{info, warn};

use crate::board::{is_symmetric, ladder_board, Board, BoardError, Field, Move, Position};
use crate::movegen::random_move;
use crate::protocol::notation::{format_fields, format_moves, parse_setup, NotationError};
use crate::protocol::parser::ReachFilter;
use crate::render::{render, RenderStyle};

/// Errors reported by session handlers. None of them change the board.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no board set")]
    NoBoard,

    #[error("position {index} is out of range for a board of {size} positions")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("invalid value '{value}' for option {name}")]
    InvalidOption { name: String, value: String },

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Holds the mutable state of the driver between commands.
pub struct Session {
    pub board: Option<Board>,
    pub options: HashMap<String, String>,
    rng: SmallRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with no board and an entropy-seeded RNG.
    pub fn new() -> Self {
        Session {
            board: None,
            options: HashMap::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    /// Resets to the ladder board in its starting position.
    pub fn new_game(&mut self) {
        self.board = Some(ladder_board());
        info!("new game on the ladder board");
    }

    /// Replaces the board with the one described by a JSON setup.
    ///
    /// On error the previous board is kept.
    pub fn set_position(&mut self, setup: &str) -> Result<(), SessionError> {
        let setup = parse_setup(setup)?;
        if !is_symmetric(&setup.adjacency) {
            warn!("setup has one-way edges");
        }
        let board = setup.into_board()?;
        info!(size = board.size(), "board set");
        self.board = Some(board);
        Ok(())
    }

    /// Sets a driver option.
    ///
    /// `Seed` reseeds the RNG (0 draws from entropy) and `Render` selects the
    /// drawing style. Other names are stored as given.
    pub fn set_option(&mut self, name: String, value: Option<String>) -> Result<(), SessionError> {
        let value = value.unwrap_or_default();
        match name.as_str() {
            "Seed" => {
                let seed = value.parse::<u64>().map_err(|_| SessionError::InvalidOption {
                    name: name.clone(),
                    value: value.clone(),
                })?;
                self.rng = if seed != 0 {
                    SmallRng::seed_from_u64(seed)
                } else {
                    SmallRng::from_entropy()
                };
            }
            "Render" => {
                if RenderStyle::from_name(&value).is_none() {
                    return Err(SessionError::InvalidOption { name: name.clone(), value });
                }
            }
            _ => {}
        }
        info!(%name, %value, "option set");
        self.options.insert(name, value);
        Ok(())
    }

    /// Returns the configured render style, or the default.
    fn render_style(&self) -> RenderStyle {
        self.options
            .get("Render")
            .and_then(|v| RenderStyle::from_name(v))
            .unwrap_or_default()
    }

    fn board(&self) -> Result<&Board, SessionError> {
        self.board.as_ref().ok_or(SessionError::NoBoard)
    }

    /// Handles the handshake: writes id, options, and `hellook`.
    pub fn handle_hello<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name graphboard")?;
        writeln!(out, "id author graphboard")?;
        writeln!(out, "option name Seed type spin default 0")?;
        writeln!(out, "option name Render type combo default auto var auto var ladder var list")?;
        writeln!(out, "hellook")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Draws the board.
    pub fn handle_show<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        let board = self.board()?;
        writeln!(out, "{}", render(board, self.render_style()).trim_end())?;
        out.flush()?;
        Ok(())
    }

    /// Writes `fields <symbols>`.
    pub fn handle_fields<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        let board = self.board()?;
        writeln!(out, "fields {}", format_fields(board))?;
        out.flush()?;
        Ok(())
    }

    /// Writes `neighbors <j...>` for position `index`.
    pub fn handle_neighbors<W: Write>(&self, index: usize, out: &mut W) -> Result<(), SessionError> {
        let board = self.board()?;
        let position = in_range(board, index)?;
        write!(out, "neighbors")?;
        for neighbor in board.node_neighbors(&position) {
            write!(out, " {}", neighbor.index())?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Writes `reachable true|false`.
    pub fn handle_reach<W: Write>(
        &self,
        start: usize,
        end: usize,
        filter: ReachFilter,
        out: &mut W,
    ) -> Result<(), SessionError> {
        let board = self.board()?;
        in_range(board, start)?;
        in_range(board, end)?;
        let found = board.breadth_first_search(start, end, |p| filter.admits(p));
        writeln!(out, "reachable {}", found)?;
        out.flush()?;
        Ok(())
    }

    /// Writes `legal` or `illegal <reason>` without touching the board.
    pub fn handle_check<W: Write>(&self, mv: Move, out: &mut W) -> Result<(), SessionError> {
        let board = self.board()?;
        check_indices(board, &mv)?;
        match board.invalid_move(&mv) {
            Some(e) => writeln!(out, "illegal {}", e)?,
            None => writeln!(out, "legal")?,
        }
        out.flush()?;
        Ok(())
    }

    /// Plays `mv` if it is legal and writes `ok`, or writes `illegal <reason>`.
    pub fn handle_move<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), SessionError> {
        let board = self.board.as_mut().ok_or(SessionError::NoBoard)?;
        check_indices(board, &mv)?;
        match board.invalid_move(&mv) {
            Some(e) => writeln!(out, "illegal {}", e)?,
            None => {
                board.do_move(&mv);
                writeln!(out, "ok")?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Writes `moves <s-d ...>` or `moves none`.
    pub fn handle_moves<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        let moves = self.board()?.possible_moves();
        if moves.is_empty() {
            writeln!(out, "moves none")?;
        } else {
            writeln!(out, "moves {}", format_moves(&moves))?;
        }
        out.flush()?;
        Ok(())
    }

    /// Plays a random legal move and writes `played <s-d>` or `played none`.
    pub fn handle_go<W: Write>(&mut self, player: Option<Field>, out: &mut W) -> Result<(), SessionError> {
        let board = self.board.as_mut().ok_or(SessionError::NoBoard)?;
        match random_move(board, player, &mut self.rng) {
            Some(mv) => {
                board.do_move(&mv);
                writeln!(out, "played {}", mv)?;
            }
            None => writeln!(out, "played none")?,
        }
        out.flush()?;
        Ok(())
    }
}

fn in_range(board: &Board, index: usize) -> Result<Position, SessionError> {
    board.get(index).ok_or(SessionError::IndexOutOfRange {
        index,
        size: board.size(),
    })
}

fn check_indices(board: &Board, mv: &Move) -> Result<(), SessionError> {
    in_range(board, mv.source)?;
    in_range(board, mv.destination)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    fn ladder_session() -> Session {
        let mut session = Session::new();
        session.new_game();
        session
    }

    #[test]
    fn new_session_has_no_board() {
        let session = Session::new();
        assert!(session.board.is_none());
        assert!(session.options.is_empty());
        let mut out = Vec::new();
        assert!(matches!(session.handle_moves(&mut out), Err(SessionError::NoBoard)));
    }

    #[test]
    fn new_game_loads_ladder() {
        let session = ladder_session();
        assert_eq!(session.board, Some(ladder_board()));
    }

    #[test]
    fn hello_outputs_handshake() {
        let session = Session::new();
        let text = output(|out| session.handle_hello(out).unwrap());
        assert!(text.contains("id name graphboard"));
        assert!(text.contains("option name Seed"));
        assert!(text.trim_end().ends_with("hellook"));
    }

    #[test]
    fn isready_outputs_readyok() {
        let session = Session::new();
        assert_eq!(output(|out| session.handle_isready(out).unwrap()).trim(), "readyok");
    }

    #[test]
    fn set_position_from_json() {
        let mut session = Session::new();
        session
            .set_position(r#"{"adjacency":[[1],[0,2],[1]],"player_a":[0]}"#)
            .unwrap();
        let text = output(|out| session.handle_fields(out).unwrap());
        assert_eq!(text, "fields A..\n");
    }

    #[test]
    fn set_position_error_keeps_board() {
        let mut session = ladder_session();
        let result = session.set_position(r#"{"adjacency":[[4]]}"#);
        assert!(matches!(result, Err(SessionError::Board(BoardError::NeighborOutOfRange { .. }))));
        assert!(matches!(session.set_position("nope"), Err(SessionError::Notation(_))));
        assert_eq!(session.board, Some(ladder_board()));
    }

    #[test]
    fn set_option_validates_known_names() {
        let mut session = Session::new();
        session.set_option("Seed".to_string(), Some("7".to_string())).unwrap();
        session.set_option("Render".to_string(), Some("list".to_string())).unwrap();
        session.set_option("Colour".to_string(), None).unwrap();
        assert_eq!(session.options.get("Seed"), Some(&"7".to_string()));
        assert_eq!(session.options.get("Colour"), Some(&String::new()));
        assert!(session.set_option("Seed".to_string(), Some("x".to_string())).is_err());
        assert!(session.set_option("Render".to_string(), Some("grid".to_string())).is_err());
        assert_eq!(session.options.get("Render"), Some(&"list".to_string()));
    }

    #[test]
    fn show_uses_render_option() {
        let mut session = ladder_session();
        let drawing = output(|out| session.handle_show(out).unwrap());
        assert!(drawing.contains("A--A--A--.--.--.--B--B--B"));

        session.set_option("Render".to_string(), Some("list".to_string())).unwrap();
        let listing = output(|out| session.handle_show(out).unwrap());
        assert!(listing.starts_with("0:A 1:A 2:A 3:A 4:."));
    }

    #[test]
    fn neighbors_and_reach() {
        let session = ladder_session();
        assert_eq!(output(|out| session.handle_neighbors(5, out).unwrap()), "neighbors 4 6 7\n");
        assert_eq!(
            output(|out| session.handle_reach(2, 6, ReachFilter::Empty, out).unwrap()),
            "reachable true\n"
        );
        assert_eq!(
            output(|out| session.handle_reach(0, 11, ReachFilter::Empty, out).unwrap()),
            "reachable false\n"
        );
        assert_eq!(
            output(|out| session.handle_reach(0, 11, ReachFilter::Any, out).unwrap()),
            "reachable true\n"
        );
    }

    #[test]
    fn out_of_range_indices_are_errors() {
        let mut session = ladder_session();
        let mut out = Vec::new();
        assert!(matches!(
            session.handle_neighbors(12, &mut out),
            Err(SessionError::IndexOutOfRange { index: 12, size: 12 })
        ));
        assert!(session.handle_check(Move::new(2, 30), &mut out).is_err());
        assert!(session.handle_move(Move::new(30, 2), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn check_does_not_mutate() {
        let session = ladder_session();
        assert_eq!(output(|out| session.handle_check(Move::new(2, 5), out).unwrap()), "legal\n");
        assert_eq!(
            output(|out| session.handle_check(Move::new(4, 2), out).unwrap()),
            "illegal source field is empty\n"
        );
        assert_eq!(session.board, Some(ladder_board()));
    }

    #[test]
    fn move_plays_only_legal_moves() {
        let mut session = ladder_session();
        assert_eq!(
            output(|out| session.handle_move(Move::new(2, 3), out).unwrap()),
            "illegal destination field is not empty\n"
        );
        assert_eq!(output(|out| session.handle_move(Move::new(2, 5), out).unwrap()), "ok\n");
        assert_eq!(output(|out| session.handle_fields(out).unwrap()), "fields AA.A.A..BBBB\n");
    }

    #[test]
    fn moves_lists_legal_moves() {
        let session = ladder_session();
        assert_eq!(
            output(|out| session.handle_moves(out).unwrap()),
            "moves 2-4 2-5 2-6 2-7 8-4 8-5 8-6 8-7\n"
        );
    }

    #[test]
    fn moves_none_when_blocked() {
        let mut session = Session::new();
        session.set_position(r#"{"adjacency":[[1],[0]],"player_a":[0],"player_b":[1]}"#).unwrap();
        assert_eq!(output(|out| session.handle_moves(out).unwrap()), "moves none\n");
        assert_eq!(output(|out| session.handle_go(None, out).unwrap()), "played none\n");
    }

    #[test]
    fn go_plays_for_requested_player() {
        let mut session = ladder_session();
        session.set_option("Seed".to_string(), Some("42".to_string())).unwrap();
        let text = output(|out| session.handle_go(Some(Field::PlayerB), out).unwrap());
        let played = text.trim().strip_prefix("played ").unwrap();
        assert!(played.starts_with("8-"), "unexpected move {}", played);
        let board = session.board.as_ref().unwrap();
        assert_eq!(board[8].field(), Field::Empty);
    }

    #[test]
    fn go_is_deterministic_with_seed() {
        let play = || {
            let mut session = ladder_session();
            session.set_option("Seed".to_string(), Some("9".to_string())).unwrap();
            output(|out| session.handle_go(None, out).unwrap())
        };
        assert_eq!(play(), play());
    }
}
