//! Graphboard library.
//!
//! Exposes the board graph, move generation, rendering, and protocol modules
//! for use by integration tests and the driver binary.

pub mod board;
pub mod movegen;
pub mod protocol;
pub mod render;
pub mod session;
