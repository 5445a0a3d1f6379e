//! Shot recommendation.

pub mod policy;

pub use policy::{recommend, recommend_from_analysis, Recommendation, ShotType, SpotSearch};
