//! House and rink geometry.
//!
//! The front-end draws a 600x300 sheet with the house centered at (300, 150).
//! The delivery end is toward y = 0, so guards sit at smaller y than the button.

use super::stone::Point;

/// Radius of a curling stone.
pub const STONE_RADIUS: f64 = 14.0;

/// X coordinate of the button.
pub const HOUSE_X: f64 = 300.0;

/// Y coordinate of the button.
pub const HOUSE_Y: f64 = 150.0;

/// Outer radius of the house; a stone whose center is at this distance counts.
pub const HOUSE_RADIUS: f64 = 100.0;

pub const RINK_X_MIN: f64 = 0.0;
pub const RINK_X_MAX: f64 = 600.0;
pub const RINK_Y_MIN: f64 = 0.0;
pub const RINK_Y_MAX: f64 = 300.0;

/// Physical layout of the sheet used by analysis and placement search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGeometry {
    pub house_center: Point,
    pub house_radius: f64,
    pub stone_radius: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for SheetGeometry {
    fn default() -> Self {
        SheetGeometry {
            house_center: Point::new(HOUSE_X, HOUSE_Y),
            house_radius: HOUSE_RADIUS,
            stone_radius: STONE_RADIUS,
            x_min: RINK_X_MIN,
            x_max: RINK_X_MAX,
            y_min: RINK_Y_MIN,
            y_max: RINK_Y_MAX,
        }
    }
}

impl SheetGeometry {
    /// Returns true if the point is in the house. The boundary is inclusive.
    pub fn is_in_house(&self, p: Point) -> bool {
        p.distance(self.house_center) <= self.house_radius
    }

    /// Returns true if the point lies strictly inside the rink bounds.
    pub fn is_in_bounds(&self, p: Point) -> bool {
        p.x > self.x_min && p.x < self.x_max && p.y > self.y_min && p.y < self.y_max
    }

    /// Point in front of the house, `offset` beyond the house edge toward
    /// the delivery end.
    pub fn guard_point(&self, offset: f64) -> Point {
        Point::new(
            self.house_center.x,
            self.house_center.y - (self.house_radius + offset),
        )
    }
}
