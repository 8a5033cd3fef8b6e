//! Unit tests for EDU placement (§8 invariants 5, 6, 10).

use std::collections::HashSet;

use rz_core::{EduAlg, EduCounts};
use rz_grid::GridBuilder;

use crate::{place_edus, spiral::spiral_offsets};

/// A 20x20 grid with every cell inside, a uniform RL ramp, and half the
/// cells marked as roads (checkerboard columns) so Restricted/Restricted+
/// have something to anchor to.
fn test_grid(m: u32) -> rz_grid::Grid {
    let mut grid = GridBuilder::new(0.0, 0.0, 0.02, 0.02, 100.0, m).build();
    let count = grid.cell_count();
    for i in 0..count {
        grid.rl[i] = ((i % m as usize) + 1) as u32;
        grid.is_road[i] = i % 2 == 0;
        grid.dpconn[i] = 1.0;
    }
    grid.rebuild_zones_inside();
    grid
}

fn no_duplicate_cells_per_rl(grid: &rz_grid::Grid) -> bool {
    for list in &grid.edus {
        let set: HashSet<_> = list.iter().collect();
        if set.len() != list.len() {
            return false;
        }
    }
    true
}

fn every_edu_cell_has_flag_and_one_list(grid: &rz_grid::Grid) -> bool {
    for idx in 0..grid.cell_count() {
        let appears = grid
            .edus
            .iter()
            .filter(|list| list.iter().any(|&id| id.index() == idx))
            .count();
        if grid.has_edu[idx] {
            if appears != 1 {
                return false;
            }
        } else if appears != 0 {
            return false;
        }
    }
    true
}

#[test]
fn unbalanced_respects_invariants() {
    let mut grid = test_grid(4);
    let counts = EduCounts { loose: 6, tight: 0 };
    place_edus(&mut grid, EduAlg::Unbalanced, counts, 0.0, 1).unwrap();

    assert!(no_duplicate_cells_per_rl(&grid));
    assert!(every_edu_cell_has_flag_and_one_list(&grid));
    let total: usize = grid.edus.iter().map(|v| v.len()).sum();
    assert!(total <= grid.zones_inside.len());
}

#[test]
fn balanced_respects_minimum_distance() {
    let mut grid = test_grid(3);
    let counts = EduCounts { loose: 8, tight: 0 };
    let prep = crate::prep::prepare(&grid, counts, false, 0.0);
    place_edus(&mut grid, EduAlg::Balanced, counts, 0.0, 1).unwrap();

    assert!(no_duplicate_cells_per_rl(&grid));
    assert!(every_edu_cell_has_flag_and_one_list(&grid));

    for (rl, list) in grid.edus.iter().enumerate().skip(1) {
        let min_dist = prep.min_dist[rl];
        for i in 0..list.len() {
            for j in (i + 1)..list.len() {
                let d = grid.grid_distance(list[i], list[j]);
                assert!(d > min_dist, "RL {rl}: distance {d} not > {min_dist}");
            }
        }
    }
}

#[test]
fn restricted_places_only_on_roads() {
    let mut grid = test_grid(3);
    let counts = EduCounts { loose: 6, tight: 0 };
    place_edus(&mut grid, EduAlg::Restricted, counts, 0.0, 1).unwrap();

    assert!(no_duplicate_cells_per_rl(&grid));
    for list in &grid.edus {
        for &id in list {
            assert!(grid.is_road[id.index()], "restricted EDU at non-road cell {id}");
        }
    }
}

#[test]
fn restricted_plus_places_tight_before_loose_on_roads() {
    let mut grid = test_grid(3);
    let counts = EduCounts { loose: 4, tight: 4 };
    place_edus(&mut grid, EduAlg::RestrictedPlus, counts, 0.5, 1).unwrap();

    assert!(no_duplicate_cells_per_rl(&grid));
    for list in &grid.edus {
        for &id in list {
            assert!(grid.is_road[id.index()]);
            assert!(grid.dpconn[id.index()] > 0.0);
        }
    }
    let total: usize = grid.edus.iter().map(|v| v.len()).sum();
    assert!(total <= 8);
}

#[test]
fn random_is_deterministic_given_seed() {
    let mut grid_a = test_grid(4);
    let mut grid_b = test_grid(4);
    let counts = EduCounts { loose: 5, tight: 0 };

    place_edus(&mut grid_a, EduAlg::Random, counts, 0.0, 42).unwrap();
    place_edus(&mut grid_b, EduAlg::Random, counts, 0.0, 42).unwrap();

    assert_eq!(grid_a.edus, grid_b.edus);
}

#[test]
fn random_draws_without_replacement() {
    let mut grid = test_grid(4);
    let counts = EduCounts { loose: 100, tight: 0 };
    place_edus(&mut grid, EduAlg::Random, counts, 0.0, 7).unwrap();
    assert!(no_duplicate_cells_per_rl(&grid));
}

#[test]
fn empty_aoi_is_rejected() {
    let mut grid = test_grid(2);
    grid.inside.iter_mut().for_each(|i| *i = false);
    grid.rebuild_zones_inside();

    let err = place_edus(&mut grid, EduAlg::Unbalanced, EduCounts { loose: 1, tight: 0 }, 0.0, 1)
        .unwrap_err();
    assert!(matches!(err, crate::PlacementError::EmptyAoi));
}

#[test]
fn spiral_visits_every_cell_in_the_box_exactly_once() {
    for radius in [1u32, 2, 3] {
        let offsets = spiral_offsets(radius);
        assert_eq!(offsets.len(), (2 * radius as usize + 1).pow(2) - 1);

        let mut seen = HashSet::new();
        let (mut x, mut y) = (0i64, 0i64);
        seen.insert((0i64, 0i64));
        for (dx, dy) in offsets {
            x += dx;
            y += dy;
            assert!(seen.insert((x, y)), "cell ({x},{y}) visited twice");
        }
    }
}
