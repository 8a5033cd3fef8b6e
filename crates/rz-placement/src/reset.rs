//! Reset placement state before a policy run (`reset_edus_flag`, §4.9).

use rz_grid::{EduType, Grid};

/// Clear every cell's `has_edu`/`edu_type` and empty every RL's EDU list.
/// Called once before any policy runs, and again before each successive
/// run of the [`crate::restricted`] loop.
pub fn reset_edus(grid: &mut Grid) {
    grid.has_edu.iter_mut().for_each(|h| *h = false);
    grid.edu_type.iter_mut().for_each(|t| *t = EduType::None);
    for list in grid.edus.iter_mut() {
        list.clear();
    }
}
