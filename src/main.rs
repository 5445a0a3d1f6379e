//! Hammer -- a curling shot advisor implementing the CSI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the CSI (Curling Shot Interface) convention. Logs go to stderr;
//! set `RUST_LOG` to change the level.

use std::io::{self, BufRead};

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use hammer::engine::Engine;
use hammer::protocol::parser::{parse_command, Command};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();
}

/// Runs the main CSI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() -> io::Result<()> {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Csi => engine.handle_csi(&mut out)?,
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::SetOption { name, value } => {
                if let Err(e) = engine.set_option(&name, value.as_deref()) {
                    tracing::warn!("setoption: {}", e);
                }
            }
            Command::NewGame => engine.new_game(),
            Command::Position { sheet } => {
                if let Err(e) = engine.set_position(&sheet) {
                    tracing::warn!("failed to parse sheet: {}", e);
                }
            }
            Command::SetTeam { team } => engine.set_team(team),
            Command::Go => engine.handle_go(&mut out)?,
            Command::Recommend { json } => engine.handle_recommend(&json, &mut out)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
