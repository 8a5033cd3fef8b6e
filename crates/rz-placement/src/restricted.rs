//! Policy: Restricted (§4.9, job contract `edu_alg = "restricted"`).
//!
//! Iterates Balanced to placement, then relocates every non-road EDU to the
//! nearest road cell within its RL's coverage radius (a spiral search), and
//! drops it if none is found. Whatever remains short of the target is
//! re-run through Balanced with the shortfall, until the target is met or a
//! run makes no further progress.

use rz_core::{CellId, EduCounts};
use rz_grid::Grid;

use crate::prep::prepare;
use crate::reset::reset_edus;
use crate::spiral::spiral_offsets;

/// Search a spiral of radius `radius` around `origin` for a road cell that
/// is inside the AoI, unoccupied, and not already claimed by `final_list`.
/// Returns the first match, or `None` if the spiral is exhausted.
fn find_road_replacement(
    grid: &Grid,
    origin: CellId,
    radius: f64,
    final_list: &[CellId],
) -> Option<CellId> {
    let (x0, y0) = grid.xy(origin);
    let spiral_radius = radius.round().max(1.0) as u32;

    // Offsets are unit steps along the spiral path, not absolute
    // displacements from `origin` — each one must accumulate onto a running
    // position (mirrors the test's `x += dx; y += dy` walk and the
    // reference's `zone_id += step` accumulation).
    let (mut cx, mut cy) = (x0 as i64, y0 as i64);
    for (dx, dy) in spiral_offsets(spiral_radius) {
        cx += dx;
        cy += dy;
        if !grid.in_bounds(cx, cy) {
            continue;
        }
        let candidate = grid.id_of(cx as u32, cy as u32);
        // Guards against the spiral reaching past the RL's coverage circle
        // (the reference's `dist > radius + 1: continue` guard, §9).
        if grid.grid_distance(origin, candidate) > radius + 1.0 {
            continue;
        }
        if !grid.inside[candidate.index()] {
            continue;
        }
        if !grid.is_road[candidate.index()] {
            continue;
        }
        if grid.has_edu[candidate.index()] {
            continue;
        }
        if final_list.contains(&candidate) {
            continue;
        }
        return Some(candidate);
    }
    None
}

/// Run the Restricted policy for a total target of `edu_counts.total()`.
pub fn place(grid: &mut Grid, edu_counts: EduCounts) {
    let m = grid.m as usize;
    let target = edu_counts.total();
    let mut final_edus: Vec<Vec<CellId>> = vec![Vec::new(); m + 1];

    let mut remaining = target;
    let mut run = 0u32;

    loop {
        if remaining == 0 {
            break;
        }
        run += 1;
        log::debug!("restricted placement: run #{run}, {remaining} EDUs remaining");

        reset_edus(grid);
        let prep = prepare(grid, EduCounts { loose: remaining, tight: 0 }, false, 0.0);
        crate::balanced::place(grid, &prep);

        for i in 1..=m {
            let candidates: Vec<CellId> = grid.edus[i].clone();
            let mut removal = Vec::new();

            for zone in candidates {
                if grid.is_road[zone.index()] {
                    continue;
                }
                removal.push(zone);
                grid.has_edu[zone.index()] = false;

                if let Some(replacement) =
                    find_road_replacement(grid, zone, prep.radius[i], &final_edus[i])
                {
                    grid.has_edu[replacement.index()] = true;
                    grid.edus[i].push(replacement);
                }
            }

            grid.edus[i].retain(|id| !removal.contains(id));
        }

        let mut placed_this_run = 0usize;
        for i in 1..=m {
            placed_this_run += grid.edus[i].len();
            final_edus[i].extend(grid.edus[i].drain(..));
        }

        let total_placed: usize = final_edus.iter().map(|v| v.len()).sum();
        remaining = target.saturating_sub(total_placed as u32);

        if placed_this_run == 0 {
            log::debug!("restricted placement: run #{run} made no progress, stopping");
            break;
        }
    }

    for i in 1..=m {
        grid.edus[i] = std::mem::take(&mut final_edus[i]);
    }

    log::debug!(
        "restricted placement finished: {} of {} EDUs placed",
        grid.edus.iter().map(|v| v.len()).sum::<usize>(),
        target
    );
}
