//! Reporting (§4.10): per-RL counts handed to the external writer.

use std::time::Duration;

use rz_grid::Grid;

/// Per-RL counts, 1-indexed (`[0]` unused, matching `Grid::edus`).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlCounts {
    /// Count of AoI-inside cells at each RL.
    pub zones: Vec<u32>,
    /// Count of road cells at each RL.
    pub roads: Vec<u32>,
    /// Count of cells with `urban_prob >= 0.5` at each RL.
    pub urban: Vec<u32>,
    /// Count of placed EDUs at each RL.
    pub edus: Vec<u32>,
}

/// The classification/positioning report §4.10 exposes to the CLI's
/// `res_data` writer.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub counts: RlCounts,
    pub classification_secs: f64,
    pub positioning_secs: f64,
}

/// Threshold above which a cell counts as "urban" for reporting purposes.
const URBAN_THRESHOLD: f64 = 0.5;

/// Tally per-RL counts over a completed grid.
pub fn count_by_rl(grid: &Grid) -> RlCounts {
    let m = grid.m as usize;
    let mut zones = vec![0u32; m + 1];
    let mut roads = vec![0u32; m + 1];
    let mut urban = vec![0u32; m + 1];
    let mut edus = vec![0u32; m + 1];

    for &id in &grid.zones_inside {
        let idx = id.index();
        let rl = grid.rl[idx] as usize;
        if rl == 0 || rl > m {
            continue;
        }
        zones[rl] += 1;
        if grid.is_road[idx] {
            roads[rl] += 1;
        }
        if grid.urban_prob[idx] >= URBAN_THRESHOLD {
            urban[rl] += 1;
        }
    }

    for i in 1..=m {
        edus[i] = grid.edus[i].len() as u32;
    }

    RlCounts { zones, roads, urban, edus }
}

/// Build the full report, given the elapsed time of the classification
/// (grid construction through RL quantization) and positioning (EDU
/// placement) phases.
pub fn build_report(grid: &Grid, classification: Duration, positioning: Duration) -> Report {
    Report {
        counts: count_by_rl(grid),
        classification_secs: classification.as_secs_f64(),
        positioning_secs: positioning.as_secs_f64(),
    }
}
