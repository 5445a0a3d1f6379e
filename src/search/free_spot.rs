//! Spiral search for an open spot near a target point.
//!
//! Probes outward from the target on concentric rings. Attempt 0 is the target
//! itself; attempt `i > 0` sits at angle `i * angle_step` on ring
//! `ceil(i / per_rev)`, where `per_rev = 360 / angle_step`. Every full
//! revolution therefore moves one ring step further out. The ring step equals
//! the minimum clearance.
//!
//! A candidate is accepted when its distance to every stone is at least the
//! minimum clearance (exactly the clearance is accepted) and it lies strictly
//! inside the rink bounds.

use crate::sheet::{Point, SheetGeometry, Stone};

pub const DEFAULT_ANGLE_STEP_DEG: u32 = 30;
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
pub const DEFAULT_CLEARANCE_BUFFER: f64 = 2.0;

/// Tunables for the spiral probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotSearchParams {
    /// Angular step between probes, in degrees. Must divide 360.
    pub angle_step_deg: u32,
    /// Upper bound on probes before falling back to the target.
    pub max_attempts: usize,
    /// Gap required between two stone edges.
    pub clearance_buffer: f64,
}

impl Default for SpotSearchParams {
    fn default() -> Self {
        SpotSearchParams {
            angle_step_deg: DEFAULT_ANGLE_STEP_DEG,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            clearance_buffer: DEFAULT_CLEARANCE_BUFFER,
        }
    }
}

impl SpotSearchParams {
    /// Minimum center-to-center distance between a candidate and any stone.
    pub fn min_clearance(&self, geometry: &SheetGeometry) -> f64 {
        2.0 * geometry.stone_radius + self.clearance_buffer
    }

    /// Number of probes in one full revolution.
    pub fn probes_per_revolution(&self) -> usize {
        ((360 / self.angle_step_deg.max(1)) as usize).max(1)
    }

    /// Position of probe `attempt` around `origin`.
    pub fn probe(&self, origin: Point, attempt: usize, ring_step: f64) -> Point {
        let per_rev = self.probes_per_revolution();
        let ring = attempt.div_ceil(per_rev);
        let radius = ring_step * ring as f64;
        let degrees = (attempt as u64 * self.angle_step_deg as u64) % 360;
        let angle = (degrees as f64).to_radians();
        Point::new(origin.x + radius * angle.cos(), origin.y + radius * angle.sin())
    }
}

/// Returns true if `p` keeps at least `min_clearance` from every stone.
pub fn is_clear(p: Point, stones: &[Stone], min_clearance: f64) -> bool {
    stones.iter().all(|s| s.distance_to(p) >= min_clearance)
}

/// Searches for the closest open, in-bounds point to `target`.
///
/// Returns `None` when every probe up to `max_attempts` is blocked.
pub fn search_free_spot(
    target: Point,
    stones: &[Stone],
    geometry: &SheetGeometry,
    params: &SpotSearchParams,
) -> Option<Point> {
    let clearance = params.min_clearance(geometry);
    (0..params.max_attempts)
        .map(|attempt| params.probe(target, attempt, clearance))
        .find(|&p| geometry.is_in_bounds(p) && is_clear(p, stones, clearance))
}

/// Where a placement ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub point: Point,
    /// False when every candidate was blocked and `point` is the original target.
    pub found: bool,
}

/// Like [`search_free_spot`], but falls back to `target` itself when no
/// open point is found.
pub fn find_free_spot(
    target: Point,
    stones: &[Stone],
    geometry: &SheetGeometry,
    params: &SpotSearchParams,
) -> Placement {
    match search_free_spot(target, stones, geometry, params) {
        Some(point) => Placement { point, found: true },
        None => {
            tracing::warn!(
                x = target.x,
                y = target.y,
                attempts = params.max_attempts,
                "no free spot found, keeping original target"
            );
            Placement {
                point: target,
                found: false,
            }
        }
    }
}
