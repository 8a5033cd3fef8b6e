//! Risk from weighted Points of Interest (§4.4).
//!
//! `risk(z) = 1 / Σ_p s(z, p)`, where good PoIs (`weight ≥ 0`) contribute
//! `weight / d²` and bad PoIs (`weight < 0`) contribute `d² / weight.abs()` —
//! the inversion makes a nearby hazard *raise* the accumulator the same way
//! a distant asset does, so both push `risk` down. A cell with no PoI
//! contribution at all keeps the grid's default `risk = 1.0`.
//!
//! §9 deviation: §4.4 and the reference both divide the bad-PoI term by the
//! *signed* weight (`d² / weight`, `weight < 0`), which makes that term
//! negative. This module divides by `weight.abs()` instead, so a hazard's
//! contribution stays positive and still raises the accumulator. Dividing
//! by a negative weight can drive the accumulator toward or past zero,
//! which flips the sign of `risk = 1/s` and breaks the "nearby hazard
//! raises risk" intent the formula is for. Flagged rather than silently
//! diverging; see DESIGN.md decision 8.

use rz_grid::Grid;

/// Score a single cell against every inside PoI. Returns `None` if the
/// accumulator never left zero (no contributing PoIs).
fn score_cell(grid: &Grid, lat: f64, lon: f64) -> Option<f64> {
    let z = rz_core::GeoPoint::new(lat, lon);
    let mut s = 0.0_f64;
    let mut any = false;

    for poi in &grid.pois_inside {
        let d = z.distance_m(poi.point());
        let d2 = d * d;
        if d2 == 0.0 {
            // Coincident with a PoI: treat as maximally close without dividing by zero.
            continue;
        }
        if poi.is_bad() {
            s += d2 / poi.weight.abs();
        } else {
            s += poi.weight / d2;
        }
        any = true;
    }

    if any { Some(s) } else { None }
}

/// Compute `risk` for every AoI-inside cell (§4.4). If no PoIs fall inside
/// the AoI at all, every inside cell keeps the uniform default `risk = 1.0`
/// — the non-fatal "No PoIs" condition (§7).
pub fn score_poi_risk(grid: &mut Grid) {
    if grid.pois_inside.is_empty() {
        log::warn!("no PoIs inside the AoI; risk defaults to a uniform constant for every cell");
        return;
    }

    let lats = &grid.lat;
    let lons = &grid.lon;

    #[cfg(feature = "parallel")]
    let scored: Vec<(usize, f64)> = {
        use rayon::prelude::*;
        grid.zones_inside
            .par_iter()
            .filter_map(|&id| {
                let idx = id.index();
                score_cell(grid, lats[idx], lons[idx]).map(|s| (idx, 1.0 / s))
            })
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let scored: Vec<(usize, f64)> = grid
        .zones_inside
        .iter()
        .filter_map(|&id| {
            let idx = id.index();
            score_cell(grid, lats[idx], lons[idx]).map(|s| (idx, 1.0 / s))
        })
        .collect();

    for (idx, risk) in scored {
        grid.risk[idx] = risk;
    }

    log::info!(
        "PoI risk scored for {} of {} inside cells",
        grid.zones_inside.len(),
        grid.cell_count()
    );
}
