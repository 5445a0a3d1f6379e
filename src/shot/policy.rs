//! Shot selection policy.
//!
//! Decides between a draw, a takeout, and a guard from the shooting team's
//! point of view:
//!
//! 1. Opponent has nothing in the house: draw to the button.
//! 2. We have nothing in the house: take out the opponent's shot stone.
//! 3. Both teams are in the house: guard in front of the house.
//!
//! Draws and guards are placement shots, so their target goes through the
//! free-spot search. A takeout aims at the stone itself.

use crate::analysis::{analyze, HouseAnalysis};
use crate::config::EngineConfig;
use crate::search::find_free_spot;
use crate::sheet::{Point, Stone, Team};

/// The kind of shot recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotType {
    DrawToButton,
    Takeout,
    Guard,
}

impl ShotType {
    /// Human-readable label sent to the front-end.
    pub const fn label(self) -> &'static str {
        match self {
            ShotType::DrawToButton => "Draw to Button",
            ShotType::Takeout => "Takeout",
            ShotType::Guard => "Guard",
        }
    }

    /// Single-word token used in `bestshot` lines.
    pub const fn token(self) -> &'static str {
        match self {
            ShotType::DrawToButton => "draw",
            ShotType::Takeout => "takeout",
            ShotType::Guard => "guard",
        }
    }
}

/// How the final target was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotSearch {
    /// Takeout on a known stone; no placement search.
    Skipped,
    /// The search found an open spot.
    Found,
    /// Every probe was blocked; the raw target was kept.
    Fallback,
}

impl SpotSearch {
    pub const fn token(self) -> &'static str {
        match self {
            SpotSearch::Skipped => "none",
            SpotSearch::Found => "found",
            SpotSearch::Fallback => "fallback",
        }
    }
}

/// A recommended shot and the house counts it was based on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub shot: ShotType,
    pub target: Point,
    pub blue_in_house: usize,
    pub red_in_house: usize,
    pub search: SpotSearch,
}

impl Recommendation {
    pub fn in_house(&self, team: Team) -> usize {
        match team {
            Team::Blue => self.blue_in_house,
            Team::Red => self.red_in_house,
        }
    }
}

/// Recommends a shot for `shooter` given the stones in play.
pub fn recommend(stones: &[Stone], shooter: Team, config: &EngineConfig) -> Recommendation {
    let analysis = analyze(stones, &config.geometry);
    recommend_from_analysis(&analysis, stones, shooter, config)
}

/// Applies the policy to an existing analysis of `stones`.
pub fn recommend_from_analysis(
    analysis: &HouseAnalysis,
    stones: &[Stone],
    shooter: Team,
    config: &EngineConfig,
) -> Recommendation {
    let opponent = shooter.opponent();
    let button = config.geometry.house_center;

    let (shot, target, search) = if analysis.count(opponent) == 0 {
        let (target, search) = place(button, stones, config);
        (ShotType::DrawToButton, target, search)
    } else if analysis.count(shooter) == 0 {
        match analysis.closest(opponent) {
            Some(stone) => (ShotType::Takeout, stone.position(), SpotSearch::Skipped),
            None => {
                let (target, search) = place(button, stones, config);
                (ShotType::Takeout, target, search)
            }
        }
    } else {
        let guard = config.geometry.guard_point(config.guard_offset);
        let (target, search) = place(guard, stones, config);
        (ShotType::Guard, target, search)
    };

    tracing::debug!(
        shooter = shooter.name(),
        shot = shot.label(),
        x = target.x,
        y = target.y,
        search = search.token(),
        "shot selected"
    );

    Recommendation {
        shot,
        target,
        blue_in_house: analysis.count(Team::Blue),
        red_in_house: analysis.count(Team::Red),
        search,
    }
}

/// Moves a placement target to the nearest open spot.
fn place(target: Point, stones: &[Stone], config: &EngineConfig) -> (Point, SpotSearch) {
    let placed = find_free_spot(target, stones, &config.geometry, &config.search);
    let search = if placed.found {
        SpotSearch::Found
    } else {
        SpotSearch::Fallback
    };
    (placed.point, search)
}
