//! House occupancy analysis.
//!
//! Splits the stones by team, keeps the ones inside the house, and picks each
//! team's closest stone to the button. Ties on distance go to the stone that
//! appears first in the input.

use crate::sheet::{SheetGeometry, Stone, Team};

/// Who is in the house, and who is closest to the button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HouseAnalysis {
    pub in_house_blue: Vec<Stone>,
    pub in_house_red: Vec<Stone>,
    pub closest_blue: Option<Stone>,
    pub closest_red: Option<Stone>,
}

impl HouseAnalysis {
    /// In-house stones for a team, in input order.
    pub fn in_house(&self, team: Team) -> &[Stone] {
        match team {
            Team::Blue => &self.in_house_blue,
            Team::Red => &self.in_house_red,
        }
    }

    /// The team's stone closest to the button, if it has one in the house.
    pub fn closest(&self, team: Team) -> Option<Stone> {
        match team {
            Team::Blue => self.closest_blue,
            Team::Red => self.closest_red,
        }
    }

    pub fn count(&self, team: Team) -> usize {
        self.in_house(team).len()
    }
}

/// Analyzes house occupancy for both teams.
pub fn analyze(stones: &[Stone], geometry: &SheetGeometry) -> HouseAnalysis {
    let in_house_blue = in_house_for(stones, Team::Blue, geometry);
    let in_house_red = in_house_for(stones, Team::Red, geometry);
    let closest_blue = closest_to_button(&in_house_blue, geometry);
    let closest_red = closest_to_button(&in_house_red, geometry);

    HouseAnalysis {
        in_house_blue,
        in_house_red,
        closest_blue,
        closest_red,
    }
}

fn in_house_for(stones: &[Stone], team: Team, geometry: &SheetGeometry) -> Vec<Stone> {
    stones
        .iter()
        .filter(|s| s.team == team && geometry.is_in_house(s.position()))
        .copied()
        .collect()
}

/// First stone with the minimum distance to the button.
fn closest_to_button(stones: &[Stone], geometry: &SheetGeometry) -> Option<Stone> {
    let mut best: Option<(Stone, f64)> = None;
    for stone in stones {
        let d = stone.distance_to(geometry.house_center);
        match best {
            // Strict comparison keeps the earlier stone on ties.
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((*stone, d)),
        }
    }
    best.map(|(s, _)| s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue(x: f64, y: f64) -> Stone {
        Stone::new(x, y, Team::Blue)
    }

    fn red(x: f64, y: f64) -> Stone {
        Stone::new(x, y, Team::Red)
    }

    #[test]
    fn empty_sheet_has_nothing_in_house() {
        let a = analyze(&[], &SheetGeometry::default());
        assert!(a.in_house_blue.is_empty());
        assert!(a.in_house_red.is_empty());
        assert_eq!(a.closest_blue, None);
        assert_eq!(a.closest_red, None);
    }

    #[test]
    fn partitions_by_team_and_filters_by_house() {
        let stones = [
            blue(300.0, 150.0),
            red(320.0, 150.0),
            blue(50.0, 50.0),
            red(390.0, 150.0),
            red(500.0, 280.0),
        ];
        let a = analyze(&stones, &SheetGeometry::default());
        assert_eq!(a.in_house_blue, vec![blue(300.0, 150.0)]);
        assert_eq!(a.in_house_red, vec![red(320.0, 150.0), red(390.0, 150.0)]);
        assert_eq!(a.count(Team::Blue), 1);
        assert_eq!(a.count(Team::Red), 2);
    }

    #[test]
    fn house_edge_counts() {
        let stones = [red(400.0, 150.0), red(400.5, 150.0)];
        let a = analyze(&stones, &SheetGeometry::default());
        assert_eq!(a.in_house_red, vec![red(400.0, 150.0)]);
    }

    #[test]
    fn closest_picks_minimum_distance() {
        let stones = [red(360.0, 150.0), red(300.0, 170.0), red(250.0, 150.0)];
        let a = analyze(&stones, &SheetGeometry::default());
        assert_eq!(a.closest(Team::Red), Some(red(300.0, 170.0)));
        assert_eq!(a.closest(Team::Blue), None);
    }

    #[test]
    fn closest_tie_goes_to_first_in_input() {
        let stones = [
            blue(330.0, 150.0),
            blue(270.0, 150.0),
            blue(300.0, 180.0),
        ];
        let a = analyze(&stones, &SheetGeometry::default());
        assert_eq!(a.closest(Team::Blue), Some(blue(330.0, 150.0)));
    }

    #[test]
    fn stones_outside_rink_are_tolerated() {
        let stones = [blue(-500.0, 9000.0), red(f64::MAX, 0.0)];
        let a = analyze(&stones, &SheetGeometry::default());
        assert_eq!(a.count(Team::Blue), 0);
        assert_eq!(a.count(Team::Red), 0);
    }
}
