//! Policy: Balanced (§4.9, job contract `edu_alg = "enhanced"`).
//!
//! Scans with stride `r_min` on the y-axis; within each scanned row, walks
//! x one cell at a time, skipping cells outside the AoI and cells too close
//! to an already-placed EDU ([`guard::blocked_by_existing`]). Once a cell is
//! accepted, the walk jumps ahead by `2 * r_min` cells — the EDU's
//! footprint — before resuming the one-cell-at-a-time search.

use rz_grid::Grid;

use crate::guard::blocked_by_existing;
use crate::prep::RlPrep;

/// Run the Balanced policy. Placements use whatever is already in
/// `grid.edus` as the "already placed" set — this lets [`crate::restricted`]
/// call it repeatedly across multiple runs with accumulating state reset
/// between runs by the caller.
pub fn place(grid: &mut Grid, prep: &RlPrep) {
    let grid_x = grid.grid_x;
    let grid_y = grid.grid_y;
    if grid_x == 0 || grid_y == 0 {
        return;
    }

    let jump = ((prep.r_min * 2.0).floor().max(1.0)) as u32;
    let mut y = prep.r_min.floor().max(0.0) as u32;

    while y < grid_y {
        let mut x = 0u32;
        while x < grid_x {
            let id = grid.id_of(x, y);
            let idx = id.index();
            if !grid.inside[idx] {
                x += 1;
                continue;
            }
            if blocked_by_existing(grid, prep, id) {
                x += 1;
                continue;
            }

            // `edu_type` is left at its reset default (`None`) — only
            // Restricted+ assigns LOOSE/TIGHT (§4.9).
            grid.has_edu[idx] = true;
            let rl = grid.rl[idx] as usize;
            grid.edus[rl].push(id);
            x += jump;
        }
        y += 1;
    }

    log::debug!(
        "balanced placement: {} EDUs placed (stride={jump}, r_min={:.3})",
        grid.edus.iter().map(|v| v.len()).sum::<usize>(),
        prep.r_min
    );
}
