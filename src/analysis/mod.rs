//! Position analysis.
//!
//! Works out which stones sit in the house and which stone of each team is
//! closest to the button.

pub(crate) mod house;

pub use house::{analyze, HouseAnalysis};
