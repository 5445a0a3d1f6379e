//! Engine state management.
//!
//! Holds the current stones, the shooting team, and the engine configuration
//! between commands, and answers `go` and `recommend` with a shot. Every
//! recommendation is computed from scratch; nothing carries over between
//! shots except what the client set.

use std::io::{self, Write};

use crate::config::{ConfigError, EngineConfig, OPTIONS};
use crate::protocol::notation::{parse_sheet, NotationError};
use crate::protocol::wire::{format_response, parse_request, WireError};
use crate::sheet::{Stone, Team};
use crate::shot::{recommend, Recommendation};

/// Team that shoots when the client never says otherwise.
pub const DEFAULT_SHOOTER: Team = Team::Blue;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Vec<Stone>>,
    pub shooter: Team,
    pub config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine with no position and the default configuration.
    pub fn new() -> Self {
        Engine {
            position: None,
            shooter: DEFAULT_SHOOTER,
            config: EngineConfig::default(),
        }
    }

    /// Clears the position and resets the shooter. Options are kept.
    pub fn new_game(&mut self) {
        self.position = None;
        self.shooter = DEFAULT_SHOOTER;
    }

    /// Sets the stones in play from sheet notation.
    pub fn set_position(&mut self, sheet: &str) -> Result<(), NotationError> {
        let stones = parse_sheet(sheet)?;
        tracing::debug!(stones = stones.len(), "position set");
        self.position = Some(stones);
        Ok(())
    }

    /// Sets the shooting team.
    pub fn set_team(&mut self, team: Team) {
        self.shooter = team;
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), ConfigError> {
        self.config.apply_option(name, value)
    }

    /// Recommends a shot for the current position, if one is set.
    pub fn best_shot(&self) -> Option<Recommendation> {
        self.position
            .as_deref()
            .map(|stones| recommend(stones, self.shooter, &self.config))
    }

    /// Handles the CSI handshake: writes id, options, protocol_version, and csiok.
    pub fn handle_csi<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name hammer")?;
        writeln!(out, "id author hammer")?;
        for opt in OPTIONS.iter() {
            writeln!(
                out,
                "option name {} type {} default {}",
                opt.name, opt.kind, opt.default
            )?;
        }
        writeln!(out, "protocol_version 1")?;
        writeln!(out, "csiok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `go` command: an `info` line with the house counts, then
    /// `bestshot <token> <x> <y>`.
    pub fn handle_go<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rec = match self.best_shot() {
            Some(rec) => rec,
            None => {
                tracing::warn!("go: no position set");
                return Ok(());
            }
        };

        writeln!(
            out,
            "info shot {} blue {} red {} search {}",
            rec.shot.token(),
            rec.blue_in_house,
            rec.red_in_house,
            rec.search.token()
        )?;
        writeln!(
            out,
            "bestshot {} {:.2} {:.2}",
            rec.shot.token(),
            rec.target.x,
            rec.target.y
        )?;
        out.flush()
    }

    /// Handles `recommend <json>`: one JSON response line, or `error <message>`
    /// if the request cannot be decoded. Does not touch the engine position.
    pub fn handle_recommend<W: Write>(&self, json: &str, out: &mut W) -> io::Result<()> {
        match self.recommend_json(json) {
            Ok(body) => writeln!(out, "{}", body)?,
            Err(e) => {
                tracing::warn!("recommend: {}", e);
                writeln!(out, "error {}", e)?;
            }
        }
        out.flush()
    }

    fn recommend_json(&self, json: &str) -> Result<String, WireError> {
        let request = parse_request(json)?;
        let rec = recommend(&request.stones, request.shooter, &self.config);
        format_response(&rec)
    }
}
