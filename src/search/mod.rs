//! Placement search.
//!
//! Finds an open spot on the sheet near a desired target, avoiding stones
//! already in play.

pub mod free_spot;

pub use free_spot::{find_free_spot, is_clear, search_free_spot, Placement, SpotSearchParams};
