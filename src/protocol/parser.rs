//! Driver command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the driver main loop can dispatch on.

use tracing::warn;

use crate::board::{Field, Move, Position};

use super::notation::{parse_index, parse_move};

/// Which positions a `reach` query may pass through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReachFilter {
    /// Only empty positions, the rule moves follow.
    #[default]
    Empty,
    /// Any position.
    Any,
}

impl ReachFilter {
    /// Returns true if the search may step onto `position`.
    pub fn admits(self, position: &Position) -> bool {
        match self {
            ReachFilter::Empty => position.is_empty(),
            ReachFilter::Any => true,
        }
    }
}

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Handshake; the driver answers with its id and options.
    Hello,

    /// Synchronization ping; driver must reply `readyok`.
    IsReady,

    /// Set a driver option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset to the built-in ladder board.
    NewGame,

    /// Replace the board with a JSON setup.
    Position { setup: String },

    /// Draw the board.
    Show,

    /// Print the occupancy string.
    Fields,

    /// List the neighbors of a position: `neighbors <i>`.
    Neighbors { index: usize },

    /// Reachability query: `reach <start> <end> [empty|any]`.
    Reach {
        start: usize,
        end: usize,
        filter: ReachFilter,
    },

    /// Validate a move without playing it: `check <s>-<d>`.
    Check { mv: Move },

    /// Validate and play a move: `move <s>-<d>`.
    Move { mv: Move },

    /// List every legal move.
    Moves,

    /// Play a random legal move, optionally for one player: `go [a|b]`.
    Go { player: Option<Field> },

    /// Terminate the driver.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, _) = tokens.split_first()?;

    match head {
        "hello" => Some(Command::Hello),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "show" => Some(Command::Show),
        "fields" => Some(Command::Fields),
        "moves" => Some(Command::Moves),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(line),
        "neighbors" => parse_neighbors(&tokens),
        "reach" => parse_reach(&tokens),
        "check" => parse_mv(&tokens).map(|mv| Command::Check { mv }),
        "move" => parse_mv(&tokens).map(|mv| Command::Move { mv }),
        "go" => parse_go(&tokens),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name_parts, value_parts) = match value_idx {
        Some(vi) => (&tokens[2..vi], &tokens[vi + 1..]),
        None => (&tokens[2..], &tokens[tokens.len()..]),
    };
    if name_parts.is_empty() {
        warn!("malformed setoption: empty name");
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Some(Command::SetOption { name, value })
}

/// Parses `position <json>`, keeping everything after the keyword.
fn parse_position(line: &str) -> Option<Command> {
    let setup = line
        .trim()
        .strip_prefix("position")
        .unwrap_or("")
        .trim()
        .to_string();
    if setup.is_empty() {
        warn!("malformed position: expected 'position <json>'");
        return None;
    }
    Some(Command::Position { setup })
}

/// Parses `neighbors <i>`.
fn parse_neighbors(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed neighbors: expected 'neighbors <index>'");
        return None;
    }
    match parse_index(tokens[1]) {
        Ok(index) => Some(Command::Neighbors { index }),
        Err(e) => {
            warn!("malformed neighbors: {}", e);
            None
        }
    }
}

/// Parses `reach <start> <end> [empty|any]`.
fn parse_reach(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens.len() > 4 {
        warn!("malformed reach: expected 'reach <start> <end> [empty|any]'");
        return None;
    }
    let filter = match tokens.get(3) {
        None | Some(&"empty") => ReachFilter::Empty,
        Some(&"any") => ReachFilter::Any,
        Some(other) => {
            warn!("unknown reach filter: '{}'", other);
            return None;
        }
    };
    match (parse_index(tokens[1]), parse_index(tokens[2])) {
        (Ok(start), Ok(end)) => Some(Command::Reach { start, end, filter }),
        (Err(e), _) | (_, Err(e)) => {
            warn!("malformed reach: {}", e);
            None
        }
    }
}

/// Parses the move argument of `check` and `move`.
fn parse_mv(tokens: &[&str]) -> Option<Move> {
    if tokens.len() != 2 {
        warn!("malformed {}: expected '{} <source>-<destination>'", tokens[0], tokens[0]);
        return None;
    }
    match parse_move(tokens[1]) {
        Ok(mv) => Some(mv),
        Err(e) => {
            warn!("malformed {}: {}", tokens[0], e);
            None
        }
    }
}

/// Parses `go [a|b]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let player = match tokens.get(1) {
        None => None,
        Some(&"a") => Some(Field::PlayerA),
        Some(&"b") => Some(Field::PlayerB),
        Some(other) => {
            warn!("unknown go player: '{}'", other);
            return None;
        }
    };
    Some(Command::Go { player })
}
