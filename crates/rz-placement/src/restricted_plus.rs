//! Policy: Restricted+ (§4.9, job contract `edu_alg = "restricted_plus"`).
//!
//! A deterministic single scan over road-and-connected cells (stride
//! `r_min`), placing tight EDUs first against the configured connectivity
//! threshold, then loose EDUs against a threshold of `0`. Each tightness
//! tier retries the full-grid scan with an inflated demand (`n_edus * run`)
//! until its count is met or a full pass places nothing — the reference's
//! way of shrinking the coverage radius when one pass under-fills the
//! target.

use rz_core::EduCounts;
use rz_grid::{EduType, Grid};

use crate::guard::blocked_by_existing;
use crate::prep::prepare;

/// Place up to `n_edus` EDUs of `edu_type`, restricted to cells with
/// `dpconn > threshold`.
fn place_tier(grid: &mut Grid, n_edus: u32, threshold: f64, edu_type: EduType) {
    if n_edus == 0 {
        return;
    }

    let mut remaining = n_edus;
    let mut run = 0u32;
    let mut placed_any = true;

    while remaining > 0 && placed_any {
        placed_any = false;
        run += 1;

        let demand = n_edus.saturating_mul(run);
        let prep = prepare(grid, EduCounts { loose: demand, tight: 0 }, true, threshold);

        let grid_x = grid.grid_x;
        let grid_y = grid.grid_y;
        if grid_x == 0 || grid_y == 0 {
            break;
        }
        let jump = ((prep.r_min * 2.0).floor().max(1.0)) as u32;
        let mut y = prep.r_min.floor().max(0.0) as u32;

        while remaining > 0 && y < grid_y {
            let mut x = 0u32;
            while remaining > 0 && x < grid_x {
                let id = grid.id_of(x, y);
                let idx = id.index();
                let eligible = grid.inside[idx]
                    && grid.is_road[idx]
                    && grid.dpconn[idx] > threshold
                    && !grid.has_edu[idx];

                if !eligible {
                    x += 1;
                    continue;
                }
                if blocked_by_existing(grid, &prep, id) {
                    x += 1;
                    continue;
                }

                grid.has_edu[idx] = true;
                grid.edu_type[idx] = edu_type;
                let rl = grid.rl[idx] as usize;
                grid.edus[rl].push(id);
                remaining -= 1;
                placed_any = true;
                x += jump;
            }
            y += 1;
        }

        log::debug!(
            "restricted+ placement: tier {edu_type:?} run #{run}, {remaining} of {n_edus} remaining"
        );
    }
}

/// Run the Restricted+ policy: tight EDUs at `threshold`, then loose EDUs
/// at threshold `0`, both accumulating onto whatever is already placed in
/// `grid.edus` (the caller is responsible for clearing state beforehand via
/// [`crate::reset::reset_edus`]).
pub fn place(grid: &mut Grid, edu_counts: EduCounts, threshold: f64) {
    place_tier(grid, edu_counts.tight, threshold, EduType::Tight);
    place_tier(grid, edu_counts.loose, 0.0, EduType::Loose);
}
