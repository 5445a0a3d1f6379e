//! Sheet representation.
//!
//! Contains the stone and team types and the fixed house and rink geometry
//! that every analysis and search runs against.

pub mod geometry;
pub mod stone;

pub use geometry::{
    SheetGeometry, HOUSE_RADIUS, HOUSE_X, HOUSE_Y, RINK_X_MAX, RINK_X_MIN, RINK_Y_MAX, RINK_Y_MIN,
    STONE_RADIUS,
};
pub use stone::{Point, Stone, Team, ALL_TEAMS};
