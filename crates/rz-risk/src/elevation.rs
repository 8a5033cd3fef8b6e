//! Risk from elevation and slope (§4.5).
//!
//! Elevation is normalized around the midpoint of the observed range, and
//! slope is the steepest neighbor gradient within a small spiral radius.
//! Both feed `H = 1 / (exp(elev_norm) · exp(slope))`, multiplied into
//! `risk` for cells where an elevation layer was supplied.

use rz_grid::Grid;

/// Grid-space distance beyond which a neighbor is not considered for slope
/// (§4.5 — a radius-1 spiral already stays within this, the check is kept
/// for fidelity with the source algorithm's explicit guard).
const SLOPE_NEIGHBOR_RADIUS: f64 = 3.0;

/// Ring of offsets searched for slope neighbors: a 3x3 block minus center.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Apply an `elevation` layer (one value per cell, meters) to the grid,
/// computing `risk_elevation` for every AoI-inside cell (§4.5).
///
/// `elevations` must be indexed identically to the grid's cell arrays
/// (length `grid.cell_count()`); callers source this from an elevation
/// collaborator in `rz-io`.
pub fn score_elevation_risk(grid: &mut Grid, elevations: &[f64]) {
    debug_assert_eq!(elevations.len(), grid.cell_count());

    grid.elevation.copy_from_slice(elevations);

    let hmin = elevations.iter().cloned().fold(f64::INFINITY, f64::min);
    let hmax = elevations.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let m = (hmax - hmin) / 2.0 + hmin;
    let m_top = (hmax - m).max(0.1);

    let cell_edge_m = grid.zone_size;
    let grid_x = grid.grid_x as i64;
    let grid_y = grid.grid_y as i64;

    let slope_of = |x: i64, y: i64| -> f64 {
        let self_idx = (y * grid_x + x) as usize;
        let h_self = elevations[self_idx];
        let mut max_grad = 0.0_f64;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || ny < 0 || nx >= grid_x || ny >= grid_y {
                continue;
            }
            let dist = ((dx * dx + dy * dy) as f64).sqrt();
            if dist > SLOPE_NEIGHBOR_RADIUS {
                continue;
            }
            let h_neighbor = elevations[(ny * grid_x + nx) as usize];
            let grad = (h_neighbor - h_self).abs() / cell_edge_m;
            if grad > max_grad {
                max_grad = grad;
            }
        }
        max_grad
    };

    #[cfg(feature = "parallel")]
    let scored: Vec<(usize, f64, f64)> = {
        use rayon::prelude::*;
        grid.zones_inside
            .par_iter()
            .map(|&id| {
                let idx = id.index();
                let (x, y) = (idx as i64 % grid_x, idx as i64 / grid_x);
                let elev_norm = (elevations[idx] - m) / m_top;
                let slope = slope_of(x, y);
                let h = 1.0 / (elev_norm.exp() * slope.exp());
                (idx, slope, h)
            })
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let scored: Vec<(usize, f64, f64)> = grid
        .zones_inside
        .iter()
        .map(|&id| {
            let idx = id.index();
            let (x, y) = (idx as i64 % grid_x, idx as i64 / grid_x);
            let elev_norm = (elevations[idx] - m) / m_top;
            let slope = slope_of(x, y);
            let h = 1.0 / (elev_norm.exp() * slope.exp());
            (idx, slope, h)
        })
        .collect();

    for (idx, slope, h) in scored {
        grid.slope[idx] = slope;
        grid.risk_elevation[idx] = Some(h);
    }

    log::info!("elevation risk scored for {} inside cells (m={m:.2}, m_top={m_top:.2})", grid.zones_inside.len());
}
