//! Shared per-RL EDU placement preparation (§4.9, "Shared preparation").

use rz_core::EduCounts;
use rz_grid::Grid;

/// Per-RL targets and geometry derived once before any placement policy
/// runs. All vectors are 1-indexed (`[0]` unused), matching `Grid::edus`.
pub struct RlPrep {
    /// `n_i`: count of eligible cells at RL `i`.
    pub n: Vec<u32>,
    /// `n_edu_i`: risk-weighted EDU target at RL `i`.
    pub n_edu: Vec<u32>,
    /// `r_i`: coverage radius in cells at RL `i`.
    pub radius: Vec<f64>,
    /// `d_i = 2r_i + 1`: minimum inter-EDU grid-space distance at RL `i`.
    pub min_dist: Vec<f64>,
    /// `step_i = floor(2r_i + 1)`, the Unbalanced/Balanced/Restricted+ scan stride.
    pub step: Vec<u32>,
    /// Smallest radius across all RLs (`r_M`), used as the scan stride.
    pub r_min: f64,
    /// Largest radius across all RLs (`r_1`).
    pub r_max: f64,
    /// Tail-window size searched when checking minimum inter-EDU distance
    /// (§9: a positive count of most-recently-appended entries, never a
    /// negative slice bound).
    pub search_range: usize,
}

/// Count of eligible cells at RL `i`. When `use_roads` is set, eligibility
/// additionally requires `is_road` and `dpconn > threshold` (used by the
/// Restricted+ Σ target, which only ever considers road-and-connected
/// cells).
fn count_at_rl(grid: &Grid, rl: u32, use_roads: bool, threshold: f64) -> u32 {
    grid.zones_inside
        .iter()
        .filter(|&&id| {
            let idx = id.index();
            if grid.rl[idx] != rl {
                return false;
            }
            if use_roads {
                grid.is_road[idx] && grid.dpconn[idx] > threshold
            } else {
                true
            }
        })
        .count() as u32
}

/// Derive [`RlPrep`] for a grid with `M` risk levels and a target EDU split
/// (§4.9).
pub fn prepare(grid: &Grid, edu_counts: EduCounts, use_roads: bool, threshold: f64) -> RlPrep {
    let m = grid.m as usize;
    let total = edu_counts.total();

    let mut n = vec![0u32; m + 1];
    for rl in 1..=m as u32 {
        n[rl as usize] = count_at_rl(grid, rl, use_roads, threshold);
    }

    let denom: u64 = (1..=m as u32).map(|i| i as u64 * n[i as usize] as u64).sum();

    let mut n_edu = vec![0u32; m + 1];
    for i in 1..=m as u32 {
        let ni = n[i as usize];
        if denom == 0 || ni == 0 {
            n_edu[i as usize] = 0;
            continue;
        }
        let raw = (total as u64 * i as u64 * ni as u64) / denom;
        n_edu[i as usize] = if raw == 0 { 1 } else { raw as u32 };
    }

    let mut radius = vec![0.0_f64; m + 1];
    let mut min_dist = vec![0.0_f64; m + 1];
    let mut step = vec![0u32; m + 1];
    for i in 1..=m as u32 {
        let at_i = n[i as usize] as f64;
        let edu_i = n_edu[i as usize];
        let ax_i = if edu_i > 0 { (at_i / edu_i as f64).round() } else { 0.0 };
        let r_i = (ax_i.sqrt() / 2.0).max(1.0);
        radius[i as usize] = r_i;
        min_dist[i as usize] = 2.0 * r_i + 1.0;
        step[i as usize] = (2.0 * r_i + 1.0).floor().max(1.0) as u32;
    }

    let r_min = radius[m];
    let r_max = radius[1];
    let search_range = ((2.0 * grid.grid_x as f64 / r_min.max(1.0)).ceil().max(1.0)) as usize;

    RlPrep { n, n_edu, radius, min_dist, step, r_min, r_max, search_range }
}
