//! Urban probability from road proximity (§4.8).
//!
//! Four axis-aligned sweeps (left→right, right→left, bottom→top, top→bottom)
//! each carry a decaying probability seeded to `1.0` at every road cell and
//! falling off by `reducing_factor = zone_size / 200` per subsequent cell,
//! floored at `0.0`. A cell's `urban_prob` is the maximum across the four
//! sweeps.

use rz_grid::Grid;

/// Run all four sweeps and set `urban_prob` for every cell (§4.8).
pub fn score_urban_probability(grid: &mut Grid) {
    let grid_x = grid.grid_x as usize;
    let grid_y = grid.grid_y as usize;
    if grid_x == 0 || grid_y == 0 {
        return;
    }

    let reducing_factor = grid.zone_size / 200.0;
    let mut best = vec![0.0_f64; grid.cell_count()];

    // Left -> right and right -> left, per row.
    for y in 0..grid_y {
        let row = |x: usize| y * grid_x + x;

        let mut prob = 0.0_f64;
        for x in 0..grid_x {
            let idx = row(x);
            prob = if grid.is_road[idx] { 1.0 } else { (prob - reducing_factor).max(0.0) };
            best[idx] = best[idx].max(prob);
        }

        let mut prob = 0.0_f64;
        for x in (0..grid_x).rev() {
            let idx = row(x);
            prob = if grid.is_road[idx] { 1.0 } else { (prob - reducing_factor).max(0.0) };
            best[idx] = best[idx].max(prob);
        }
    }

    // Bottom -> top and top -> bottom, per column.
    for x in 0..grid_x {
        let col = |y: usize| y * grid_x + x;

        let mut prob = 0.0_f64;
        for y in 0..grid_y {
            let idx = col(y);
            prob = if grid.is_road[idx] { 1.0 } else { (prob - reducing_factor).max(0.0) };
            best[idx] = best[idx].max(prob);
        }

        let mut prob = 0.0_f64;
        for y in (0..grid_y).rev() {
            let idx = col(y);
            prob = if grid.is_road[idx] { 1.0 } else { (prob - reducing_factor).max(0.0) };
            best[idx] = best[idx].max(prob);
        }
    }

    grid.urban_prob = best;
    log::info!("urban probability swept over {} cells (reducing_factor={reducing_factor:.6})", grid.cell_count());
}
