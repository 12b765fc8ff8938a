//! Graphboard driver.
//!
//! Reads commands from stdin and writes responses to stdout. Diagnostics go
//! to stderr through the tracing subscriber.

use std::io::{self, BufRead};

use tracing::warn;

use graphboard::protocol::parser::{parse_command, Command};
use graphboard::session::{Session, SessionError};

/// Runs the protocol loop, reading commands from stdin and writing responses
/// to stdout.
fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let result = match cmd {
            Command::Hello => session.handle_hello(&mut out).map_err(SessionError::from),
            Command::IsReady => session.handle_isready(&mut out).map_err(SessionError::from),
            Command::SetOption { name, value } => session.set_option(name, value),
            Command::NewGame => {
                session.new_game();
                Ok(())
            }
            Command::Position { setup } => session.set_position(&setup),
            Command::Show => session.handle_show(&mut out),
            Command::Fields => session.handle_fields(&mut out),
            Command::Neighbors { index } => session.handle_neighbors(index, &mut out),
            Command::Reach { start, end, filter } => {
                session.handle_reach(start, end, filter, &mut out)
            }
            Command::Check { mv } => session.handle_check(mv, &mut out),
            Command::Move { mv } => session.handle_move(mv, &mut out),
            Command::Moves => session.handle_moves(&mut out),
            Command::Go { player } => session.handle_go(player, &mut out),
            Command::Quit => break,
        };

        match result {
            Ok(()) => {}
            Err(SessionError::Io(e)) => {
                warn!("output closed: {}", e);
                break;
            }
            Err(e) => warn!("{}", e),
        }
    }
}
