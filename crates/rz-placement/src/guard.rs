//! Shared minimum-distance guard used by Balanced and Restricted+ (§4.9).
//!
//! Before accepting a candidate cell, both policies check it against a
//! *tail window* of every RL's already-placed EDUs — not just the
//! candidate's own RL — using the candidate's own RL's minimum distance.
//! The reference implementation expresses the window as a negative Python
//! slice bound (`edus[i][-1:search_range:-1]`); here it is a positive
//! `usize` count of the most-recently-appended entries (§9 decision).

use rz_core::CellId;
use rz_grid::Grid;

use crate::prep::RlPrep;

/// `true` if `candidate` (whose quantized RL determines its minimum
/// distance) lies within the minimum inter-EDU distance of any EDU already
/// placed in the tail window of any RL's list.
pub fn blocked_by_existing(grid: &Grid, prep: &RlPrep, candidate: CellId) -> bool {
    let rl = grid.rl[candidate.index()] as usize;
    let min_dist = prep.min_dist[rl];

    for list in &grid.edus[1..] {
        let tail_start = list.len().saturating_sub(prep.search_range);
        for &other in list[tail_start..].iter().rev() {
            if grid.grid_distance(candidate, other) < min_dist {
                return true;
            }
        }
    }
    false
}
