//! Stones, teams, and points on the sheet.
//!
//! A stone is an immutable position tagged with the team that threw it.
//! Coordinates are rink units, the same units the house geometry uses.

use serde::{Deserialize, Serialize};

/// One of the two teams on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Blue,
    Red,
}

/// Both teams, in notation order.
pub const ALL_TEAMS: [Team; 2] = [Team::Blue, Team::Red];

impl Team {
    /// Returns the lowercase wire name (`"blue"` or `"red"`).
    pub const fn name(self) -> &'static str {
        match self {
            Team::Blue => "blue",
            Team::Red => "red",
        }
    }

    /// Returns the single-character sheet notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Team::Blue => 'b',
            Team::Red => 'r',
        }
    }

    /// Returns the other team.
    pub const fn opponent(self) -> Team {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }

    /// Parses a team from its wire name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Team> {
        match name.to_ascii_lowercase().as_str() {
            "blue" => Some(Team::Blue),
            "red" => Some(Team::Red),
            _ => None,
        }
    }

    /// Parses a team from its sheet notation character.
    pub fn from_notation_char(c: char) -> Option<Team> {
        match c {
            'b' => Some(Team::Blue),
            'r' => Some(Team::Red),
            _ => None,
        }
    }
}

/// A position in rink coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A stone at rest on the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stone {
    pub x: f64,
    pub y: f64,
    pub team: Team,
}

impl Stone {
    pub const fn new(x: f64, y: f64, team: Team) -> Self {
        Stone { x, y, team }
    }

    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Distance from this stone's center to a point.
    pub fn distance_to(&self, p: Point) -> f64 {
        self.position().distance(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_name_roundtrip() {
        for team in ALL_TEAMS {
            assert_eq!(Team::from_name(team.name()), Some(team));
        }
        assert_eq!(Team::from_name("BLUE"), Some(Team::Blue));
        assert_eq!(Team::from_name("green"), None);
    }

    #[test]
    fn team_notation_roundtrip() {
        assert_eq!(Team::from_notation_char('b'), Some(Team::Blue));
        assert_eq!(Team::from_notation_char('r'), Some(Team::Red));
        assert_eq!(Team::from_notation_char('y'), None);
    }

    #[test]
    fn opponent_is_involutive() {
        for team in ALL_TEAMS {
            assert_ne!(team.opponent(), team);
            assert_eq!(team.opponent().opponent(), team);
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn team_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Team::Red).unwrap(), "\"red\"");
        let t: Team = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(t, Team::Blue);
        assert!(serde_json::from_str::<Team>("\"yellow\"").is_err());
    }
}
