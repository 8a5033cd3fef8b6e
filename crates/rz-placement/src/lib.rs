//! `rz-placement` — EDU positioning policies and reporting for the
//! riskzones classification engine (§4.9, §4.10).
//!
//! # Crate layout
//!
//! | Module              | Contents                                                |
//! |---------------------|------------------------------------------------------------|
//! | [`prep`]            | Shared per-RL target/radius/stride derivation           |
//! | [`spiral`]          | Square spiral offset generation                          |
//! | [`guard`]           | Minimum inter-EDU distance check shared by two policies  |
//! | [`reset`]           | Clears placement state before a policy (re)run           |
//! | [`random`]          | Policy: Random                                            |
//! | [`unbalanced`]      | Policy: Unbalanced                                        |
//! | [`balanced`]        | Policy: Balanced                                          |
//! | [`restricted`]      | Policy: Restricted                                        |
//! | [`restricted_plus`] | Policy: Restricted+                                       |
//! | [`report`]          | Per-RL zone/road/urban/EDU counts (§4.10)                |
//! | [`error`]           | `PlacementError`, `PlacementResult<T>`                    |
//!
//! [`place_edus`] is the single dispatch entry point: it resets placement
//! state, then delegates to whichever policy module `EduAlg` selects. All
//! policies except Random are deterministic given the grid alone.

pub mod balanced;
pub mod error;
pub mod guard;
pub mod prep;
pub mod random;
pub mod report;
pub mod reset;
pub mod restricted;
pub mod restricted_plus;
pub mod spiral;
pub mod unbalanced;

#[cfg(test)]
mod tests;

use rz_core::{ClassifierRng, EduAlg, EduCounts};
use rz_grid::Grid;

pub use error::{PlacementError, PlacementResult};
pub use prep::RlPrep;
pub use report::{build_report, count_by_rl, Report, RlCounts};

/// Run the EDU placement policy selected by `alg` (§4.9), after resetting
/// any placement state left over from a previous run.
///
/// `threshold` is the connectivity threshold used by Restricted+; it is
/// ignored by policies that don't consult it. `seed` drives the Random
/// policy's RNG and is otherwise unused.
pub fn place_edus(
    grid: &mut Grid,
    alg: EduAlg,
    edu_counts: EduCounts,
    threshold: f64,
    seed: u64,
) -> PlacementResult<()> {
    if grid.cell_count() == 0 {
        return Err(PlacementError::EmptyGrid);
    }
    if grid.zones_inside.is_empty() {
        return Err(PlacementError::EmptyAoi);
    }

    reset::reset_edus(grid);

    match alg {
        EduAlg::Random => {
            let prep = prep::prepare(grid, edu_counts, false, threshold);
            let mut rng = ClassifierRng::new(seed);
            random::place(grid, &prep, &mut rng);
        }
        EduAlg::Unbalanced => {
            let prep = prep::prepare(grid, edu_counts, false, threshold);
            unbalanced::place(grid, &prep);
        }
        EduAlg::Balanced => {
            let prep = prep::prepare(grid, edu_counts, false, threshold);
            balanced::place(grid, &prep);
        }
        EduAlg::Restricted => {
            restricted::place(grid, edu_counts);
        }
        EduAlg::RestrictedPlus => {
            restricted_plus::place(grid, edu_counts, threshold);
        }
    }

    log::info!(
        "EDU placement ({alg:?}) finished: {} EDUs placed",
        grid.edus.iter().map(|v| v.len()).sum::<usize>()
    );
    Ok(())
}
