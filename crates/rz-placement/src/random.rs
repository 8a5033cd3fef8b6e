//! Policy: Random (§4.9, job contract `edu_alg = "random"`).
//!
//! For each RL, draws `n_edu_i` distinct cells uniformly at random from the
//! AoI-inside cells at that RL, without replacement — if fewer cells exist
//! than requested, every one of them is taken. The only policy that
//! consults the job's seeded RNG; every other policy is deterministic given
//! the grid alone.

use rz_core::{CellId, ClassifierRng};
use rz_grid::Grid;

use crate::prep::RlPrep;

pub fn place(grid: &mut Grid, prep: &RlPrep, rng: &mut ClassifierRng) {
    let m = grid.m;

    for i in 1..=m {
        let mut cells: Vec<CellId> = grid
            .zones_inside
            .iter()
            .copied()
            .filter(|&id| grid.rl[id.index()] == i)
            .collect();

        let mut child = rng.child_for_rl(i);
        child.shuffle(&mut cells);

        let take = (prep.n_edu[i as usize] as usize).min(cells.len());
        for &id in &cells[..take] {
            // `edu_type` is left at its reset default (`None`) — the
            // reference implementation never assigns LOOSE/TIGHT here.
            grid.has_edu[id.index()] = true;
            grid.edus[i as usize].push(id);
        }
    }

    log::debug!(
        "random placement: {} EDUs drawn across {} RLs",
        grid.edus.iter().map(|v| v.len()).sum::<usize>(),
        m
    );
}
