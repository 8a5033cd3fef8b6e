//! Unit tests for PoI risk, elevation risk, normalization, connectivity, and
//! urban probability.

use std::collections::HashMap;

use rz_grid::{GridBuilder, Poi};

use crate::connectivity::{score_connectivity, AccessPoint, ConnWeights, TypeParams};
use crate::elevation::score_elevation_risk;
use crate::normalize::normalize_and_quantize;
use crate::poi_risk::score_poi_risk;
use crate::urban::score_urban_probability;

fn small_grid() -> rz_grid::Grid {
    // ~300m x 300m box centered at (0,0), 100m cells -> 3x3 grid.
    GridBuilder::new(-0.00135, -0.00135, 0.00135, 0.00135, 100.0, 4).build()
}

#[test]
fn poi_risk_without_pois_keeps_uniform_default() {
    let mut grid = small_grid();
    score_poi_risk(&mut grid);
    assert!(grid.risk.iter().all(|&r| r == 1.0));
}

#[test]
fn good_poi_lowers_nearby_risk_below_far_risk() {
    let mut grid = small_grid();
    rz_grid::poi::ingest_pois(&mut grid, vec![Poi::new(0.0, 0.0, 10.0)]);
    score_poi_risk(&mut grid);
    let near = grid.risk[grid.id_of(1, 1).index()];
    let far = grid.risk[grid.id_of(0, 0).index()];
    assert!(near < far, "cell nearest the good PoI should have lower risk (near={near}, far={far})");
}

#[test]
fn bad_poi_contributes_finite_positive_risk() {
    let mut grid = small_grid();
    rz_grid::poi::ingest_pois(&mut grid, vec![Poi::new(0.0, 0.0, -10.0)]);
    score_poi_risk(&mut grid);
    assert!(grid.risk.iter().all(|&r| r.is_finite() && r > 0.0));
}

#[test]
fn elevation_risk_flat_terrain_is_neutral() {
    let mut grid = small_grid();
    let flat = vec![100.0; grid.cell_count()];
    score_elevation_risk(&mut grid, &flat);
    for &id in &grid.zones_inside.clone() {
        let h = grid.risk_elevation[id.index()].unwrap();
        assert!((h - 1.0).abs() < 1e-9, "flat terrain should give H=1, got {h}");
        assert_eq!(grid.slope[id.index()], 0.0);
    }
}

#[test]
fn elevation_risk_detects_slope() {
    let mut grid = small_grid();
    let mut elevations = vec![0.0; grid.cell_count()];
    // Raise the center cell well above its neighbors.
    let center = grid.id_of(1, 1).index();
    elevations[center] = 100.0;
    score_elevation_risk(&mut grid, &elevations);
    assert!(grid.slope[center] > 0.0);
}

#[test]
fn normalize_zero_risk_everywhere_is_rl_one() {
    let mut grid = small_grid();
    for r in grid.risk.iter_mut() {
        *r = 0.0;
    }
    normalize_and_quantize(&mut grid);
    assert!(grid.rl.iter().all(|&rl| rl == 1));
}

#[test]
fn normalize_constant_risk_has_amplitude_one_fallback() {
    let mut grid = small_grid();
    for r in grid.risk.iter_mut() {
        *r = 2.5;
    }
    normalize_and_quantize(&mut grid);
    assert!(grid.rl.iter().all(|&rl| rl == grid.rl[0]));
}

#[test]
fn normalize_never_produces_rl_outside_range() {
    let mut grid = small_grid();
    grid.risk[0] = 1e-9;
    grid.risk[1] = 1.0;
    grid.risk[2] = 50.0;
    normalize_and_quantize(&mut grid);
    for &rl in &grid.rl {
        assert!(rl >= 1 && rl <= grid.m);
    }
}

#[test]
fn connectivity_zero_score_total_leaves_dpconn_zero() {
    let mut grid = small_grid();
    let mut params = HashMap::new();
    params.insert("cell_tower".to_string(), TypeParams { s: 1.0, t: 1.0, r: 1.0, c: 1.0 });
    let weights = ConnWeights { w_s: 0.0, w_t: 0.0, w_r: 0.0, w_c: 0.0 };
    let aps = vec![AccessPoint { lat: 0.0, lon: 0.0, range_m: 1000.0, kind: "cell_tower".into() }];
    score_connectivity(&mut grid, &aps, &params, weights);
    assert!(grid.dpconn.iter().all(|&d| d == 0.0));
}

#[test]
fn connectivity_covered_cells_get_nonzero_dpconn() {
    let mut grid = small_grid();
    let mut params = HashMap::new();
    params.insert("cell_tower".to_string(), TypeParams { s: 1.0, t: 0.0, r: 0.0, c: 0.0 });
    let weights = ConnWeights { w_s: 1.0, w_t: 0.0, w_r: 0.0, w_c: 0.0 };
    let aps = vec![AccessPoint { lat: 0.0, lon: 0.0, range_m: 1000.0, kind: "cell_tower".into() }];
    score_connectivity(&mut grid, &aps, &params, weights);
    let center = grid.id_of(1, 1).index();
    assert_eq!(grid.dpconn[center], 1.0);
}

#[test]
fn urban_probability_peaks_on_road_cells() {
    let mut grid = small_grid();
    let road_id = grid.id_of(1, 1);
    grid.is_road[road_id.index()] = true;
    score_urban_probability(&mut grid);
    assert_eq!(grid.urban_prob[road_id.index()], 1.0);
}

#[test]
fn urban_probability_decays_away_from_roads() {
    let mut grid = GridBuilder::new(-0.0045, -0.00135, 0.0045, 0.00135, 100.0, 4).build();
    let road_id = grid.id_of(0, 1);
    grid.is_road[road_id.index()] = true;
    score_urban_probability(&mut grid);
    let near = grid.urban_prob[grid.id_of(1, 1).index()];
    let far = grid.urban_prob[grid.id_of(grid.grid_x - 1, 1).index()];
    assert!(near >= far);
}
