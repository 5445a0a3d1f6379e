//! Hammer shot advisor library.
//!
//! Exposes the sheet representation, house analysis, placement search, shot
//! policy, and protocol modules for use by integration tests and the binary
//! entry points.

pub mod analysis;
pub mod config;
pub mod engine;
pub mod protocol;
pub mod search;
pub mod sheet;
pub mod shot;
pub mod sweep;
