//! Driver protocol handling.
//!
//! Implements the line-based command parser for the driver main loop and the
//! text notation for moves, occupancy strings and JSON board setups.

pub mod notation;
pub mod parser;

pub use notation::{
    format_fields, format_moves, parse_index, parse_move, parse_setup, NotationError, Setup,
};
pub use parser::{parse_command, Command, ReachFilter};
