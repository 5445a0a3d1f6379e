//! CSI command parser.
//!
//! Parses incoming CSI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::sheet::Team;

/// A parsed client-to-engine CSI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the CSI protocol handshake.
    Csi,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Clear the position and shooting team.
    NewGame,

    /// Set the stones in play from sheet notation.
    Position { sheet: String },

    /// Set the team that throws the next stone.
    SetTeam { team: Team },

    /// Recommend a shot for the current position.
    Go,

    /// Recommend a shot for a self-contained JSON request.
    Recommend { json: String },

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "csi" => Some(Command::Csi),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "go" => Some(Command::Go),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "setteam" => parse_setteam(&tokens),
        "recommend" => parse_recommend(trimmed),

        other => {
            tracing::warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        tracing::warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                tracing::warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <sheet>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        tracing::warn!("malformed position: expected 'position <sheet>'");
        return None;
    }
    // Sheet notation has no spaces, but tolerate "b300:150, r310:140".
    let sheet = tokens[1..].concat();
    Some(Command::Position { sheet })
}

/// Parses `setteam <blue|red>`.
fn parse_setteam(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        tracing::warn!("malformed setteam: expected 'setteam <blue|red>'");
        return None;
    }
    match Team::from_name(tokens[1]) {
        Some(team) => Some(Command::SetTeam { team }),
        None => {
            tracing::warn!("unknown team: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `recommend <json>`, keeping everything after the keyword verbatim.
fn parse_recommend(line: &str) -> Option<Command> {
    let json = line.strip_prefix("recommend").unwrap_or("").trim();
    if json.is_empty() {
        tracing::warn!("malformed recommend: expected 'recommend <json>'");
        return None;
    }
    Some(Command::Recommend {
        json: json.to_string(),
    })
}
