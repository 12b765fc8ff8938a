//! Text rendering of a board.
//!
//! Reads the board through `size()` and indexing only. The ladder drawing
//! hard-codes the 12-position ladder layout; any other board falls back to a
//! flat `index:symbol` listing.

use std::fmt::Write;

use crate::board::{Board, LADDER_SIZE};

/// How the driver draws a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Ladder drawing when the board has 12 positions, listing otherwise.
    #[default]
    Auto,
    Ladder,
    List,
}

impl RenderStyle {
    /// Parses a style from its option value.
    pub fn from_name(s: &str) -> Option<RenderStyle> {
        match s {
            "auto" => Some(RenderStyle::Auto),
            "ladder" => Some(RenderStyle::Ladder),
            "list" => Some(RenderStyle::List),
            _ => None,
        }
    }
}

/// Renders the board in the requested style.
///
/// `Ladder` on a board of the wrong size falls back to the listing.
pub fn render(board: &Board, style: RenderStyle) -> String {
    match style {
        RenderStyle::Auto | RenderStyle::Ladder => {
            render_ladder(board).unwrap_or_else(|| render_list(board))
        }
        RenderStyle::List => render_list(board),
    }
}

/// Draws the ladder layout, or returns `None` unless the board has 12 positions.
///
/// ```text
///       A           B
///       |           |
/// A--A--A--.--.--.--B--B--B
///             |
///             .
/// ```
pub fn render_ladder(board: &Board) -> Option<String> {
    if board.size() != LADDER_SIZE {
        return None;
    }
    let s = |i: usize| board[i].field().symbol();

    let spine: Vec<String> = [0, 1, 2, 4, 5, 7, 8, 10, 11]
        .iter()
        .map(|&i| s(i).to_string())
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "      {}           {}", s(3), s(9));
    let _ = writeln!(out, "      |           |");
    let _ = writeln!(out, "{}", spine.join("--"));
    let _ = writeln!(out, "            |");
    let _ = writeln!(out, "            {}", s(6));
    Some(out)
}

/// Lists every position as `index:symbol`, separated by spaces.
pub fn render_list(board: &Board) -> String {
    (0..board.size())
        .map(|i| format!("{}:{}", i, board[i].field().symbol()))
        .collect::<Vec<_>>()
        .join(" ")
}
