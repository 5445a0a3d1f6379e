//! Batch evaluation over random sheets.
//!
//! Generates random stone layouts, asks the recommender for a shot from both
//! sides of each sheet, and records the results as JSONL. Sheets are
//! independent, so they are fanned out over a rayon thread pool.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::protocol::notation::encode_sheet;
use crate::sheet::{Stone, Team, ALL_TEAMS};
use crate::shot::{recommend, ShotType, SpotSearch};

/// Configuration for a sweep run.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Number of random sheets to evaluate.
    pub num_sheets: usize,
    /// Upper bound on stones per sheet (a full end has 16).
    pub max_stones: usize,
    /// Worker threads in the rayon pool.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Recommender configuration shared by every sheet.
    pub engine: EngineConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            num_sheets: 1000,
            max_stones: 16,
            threads: 4,
            seed: 0,
            engine: EngineConfig::default(),
        }
    }
}

/// One recommendation for one side of one sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRecord {
    pub sheet_id: usize,
    pub sheet: String,
    pub shooter: Team,
    pub recommended_shot: &'static str,
    pub x: f64,
    pub y: f64,
    pub fallback: bool,
}

/// Shot counts across a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub draws: usize,
    pub takeouts: usize,
    pub guards: usize,
    pub fallbacks: usize,
}

/// Generates a random sheet. Two thirds of the stones land around the house
/// so that every branch of the policy gets exercised.
pub fn random_sheet<R: Rng>(rng: &mut R, config: &SweepConfig) -> Vec<Stone> {
    let g = &config.engine.geometry;
    let count = rng.gen_range(0..=config.max_stones);
    (0..count)
        .map(|_| {
            let team = if rng.gen_bool(0.5) { Team::Blue } else { Team::Red };
            let (x, y) = if rng.gen_ratio(2, 3) {
                let reach = g.house_radius * 1.2;
                (
                    rng.gen_range(g.house_center.x - reach..g.house_center.x + reach),
                    rng.gen_range(g.house_center.y - reach..g.house_center.y + reach),
                )
            } else {
                (rng.gen_range(g.x_min..g.x_max), rng.gen_range(g.y_min..g.y_max))
            };
            Stone::new(x, y, team)
        })
        .collect()
}

/// Evaluates one sheet from both sides.
pub fn evaluate_sheet(sheet_id: usize, stones: &[Stone], engine: &EngineConfig) -> Vec<SweepRecord> {
    let sheet = encode_sheet(stones);
    ALL_TEAMS
        .iter()
        .map(|&shooter| {
            let rec = recommend(stones, shooter, engine);
            SweepRecord {
                sheet_id,
                sheet: sheet.clone(),
                shooter,
                recommended_shot: rec.shot.label(),
                x: rec.target.x,
                y: rec.target.y,
                fallback: rec.search == SpotSearch::Fallback,
            }
        })
        .collect()
}

fn sheet_rng(seed: u64, sheet_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed ^ (sheet_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    } else {
        SmallRng::from_entropy()
    }
}

/// Runs the sweep, returning records ordered by sheet id then shooter.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepRecord>, rayon::ThreadPoolBuildError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()?;

    let records = pool.install(|| {
        (0..config.num_sheets)
            .into_par_iter()
            .flat_map_iter(|sheet_id| {
                let mut rng = sheet_rng(config.seed, sheet_id);
                let stones = random_sheet(&mut rng, config);
                evaluate_sheet(sheet_id, &stones, &config.engine)
            })
            .collect::<Vec<_>>()
    });

    tracing::info!(
        sheets = config.num_sheets,
        records = records.len(),
        "sweep complete"
    );
    Ok(records)
}

/// Tallies shot types and search fallbacks.
pub fn summarize(records: &[SweepRecord]) -> SweepSummary {
    let mut summary = SweepSummary::default();
    for r in records {
        if r.recommended_shot == ShotType::DrawToButton.label() {
            summary.draws += 1;
        } else if r.recommended_shot == ShotType::Takeout.label() {
            summary.takeouts += 1;
        } else {
            summary.guards += 1;
        }
        if r.fallback {
            summary.fallbacks += 1;
        }
    }
    summary
}

/// Writes records as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write>(records: &[SweepRecord], out: &mut W) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}
