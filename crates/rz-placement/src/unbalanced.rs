//! Policy: Unbalanced (§4.9, job contract `edu_alg = "balanced"`).
//!
//! A single row-major scan. Every RL tracks its own `step_x`/`step_y`
//! counter, incremented once per RL-`i` cell seen in the current row
//! (`step_x`) and once per row that contained at least one RL-`i` cell
//! (`step_y`). An EDU is placed whenever both counters are simultaneously a
//! multiple of that RL's stride. Overlapping placements across different
//! RLs are expected and accepted — this policy does not check other RLs'
//! EDU lists at all.

use rz_grid::Grid;

use crate::prep::RlPrep;

pub fn place(grid: &mut Grid, prep: &RlPrep) {
    let m = grid.m;
    let grid_x = grid.grid_x;
    let grid_y = grid.grid_y;

    let mut step_x = vec![0u32; m as usize + 1];
    let mut step_y = vec![0u32; m as usize + 1];
    let mut zone_in_y = vec![false; m as usize + 1];

    for y in 0..grid_y {
        for i in 1..=m {
            step_x[i as usize] = 0;
            if zone_in_y[i as usize] {
                step_y[i as usize] += 1;
                zone_in_y[i as usize] = false;
            }
        }

        for x in 0..grid_x {
            let id = grid.id_of(x, y);
            let idx = id.index();
            if !grid.inside[idx] {
                continue;
            }
            let rl = grid.rl[idx];
            if rl < 1 || rl > m {
                continue;
            }
            let i = rl as usize;
            zone_in_y[i] = true;

            let stride = prep.step[i].max(1);
            if step_x[i] % stride == 0 && step_y[i] % stride == 0 {
                // `edu_type` is left at its reset default (`None`) — the
                // reference implementation never assigns LOOSE/TIGHT for
                // this policy, only Restricted+ does.
                grid.has_edu[idx] = true;
                grid.edus[i].push(id);
            }
            step_x[i] += 1;
        }
    }

    log::debug!(
        "unbalanced placement: {} EDUs placed across {} RLs",
        grid.edus.iter().map(|v| v.len()).sum::<usize>(),
        m
    );
}
