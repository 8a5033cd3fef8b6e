//! Unit tests for grid construction, AoI masking, and PoI ingest.

use rz_core::{CellId, GeoPoint};

use crate::aoi::{mask_grid, point_in_ring, Ring};
use crate::builder::GridBuilder;
use crate::poi::{ingest_pois, Poi};

fn small_grid() -> crate::Grid {
    // ~300m x 300m box centered at (0,0), 100m cells -> 3x3 grid.
    GridBuilder::new(-0.00135, -0.00135, 0.00135, 0.00135, 100.0, 4).build()
}

#[test]
fn cell_count_matches_dimensions() {
    let grid = small_grid();
    assert_eq!(grid.lat.len(), grid.cell_count());
    assert_eq!(grid.lon.len(), (grid.grid_x * grid.grid_y) as usize);
}

#[test]
fn id_xy_roundtrip() {
    let grid = small_grid();
    for y in 0..grid.grid_y {
        for x in 0..grid.grid_x {
            let id = grid.id_of(x, y);
            assert_eq!(grid.xy(id), (x, y));
        }
    }
}

#[test]
fn default_inside_is_all_cells_when_no_aoi() {
    let grid = small_grid();
    assert_eq!(grid.zones_inside.len(), grid.cell_count());
}

#[test]
fn square_ring_masking() {
    let mut grid = small_grid();
    // A ring covering roughly the left half of the grid.
    let ring = Ring(vec![
        GeoPoint::new(-1.0, -1.0),
        GeoPoint::new(-1.0, 0.0),
        GeoPoint::new(1.0, 0.0),
        GeoPoint::new(1.0, -1.0),
    ]);
    mask_grid(&mut grid, vec![ring]);

    assert!(!grid.zones_inside.is_empty());
    assert!(grid.zones_inside.len() < grid.cell_count());
    for &id in &grid.zones_inside {
        assert!(grid.inside[id.index()]);
    }
}

#[test]
fn zones_inside_sorted_and_deduped() {
    let mut grid = small_grid();
    let ring = Ring(vec![
        GeoPoint::new(-1.0, -1.0),
        GeoPoint::new(-1.0, 1.0),
        GeoPoint::new(1.0, 1.0),
        GeoPoint::new(1.0, -1.0),
    ]);
    mask_grid(&mut grid, vec![ring]);

    let mut sorted = grid.zones_inside.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted, grid.zones_inside);
}

#[test]
fn masking_is_idempotent() {
    let mut grid = small_grid();
    let ring = Ring(vec![
        GeoPoint::new(-1.0, -1.0),
        GeoPoint::new(-1.0, 0.0),
        GeoPoint::new(1.0, 0.0),
        GeoPoint::new(1.0, -1.0),
    ]);
    mask_grid(&mut grid, vec![ring.clone()]);
    let first = grid.inside.clone();
    mask_grid(&mut grid, vec![ring]);
    assert_eq!(first, grid.inside);
}

#[test]
fn point_in_simple_square() {
    let ring = Ring(vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 10.0),
        GeoPoint::new(10.0, 10.0),
        GeoPoint::new(10.0, 0.0),
    ]);
    assert!(point_in_ring(GeoPoint::new(5.0, 5.0), &ring));
    assert!(!point_in_ring(GeoPoint::new(50.0, 50.0), &ring));
}

#[test]
fn poi_ingest_without_aoi_keeps_all() {
    let mut grid = small_grid();
    let pois = vec![Poi::new(0.0, 0.0, 1.0), Poi::new(10.0, 10.0, -1.0)];
    ingest_pois(&mut grid, pois.clone());
    assert_eq!(grid.pois_inside.len(), pois.len());
}

#[test]
fn poi_ingest_filters_to_aoi() {
    let mut grid = small_grid();
    let ring = Ring(vec![
        GeoPoint::new(-0.001, -0.001),
        GeoPoint::new(-0.001, 0.001),
        GeoPoint::new(0.001, 0.001),
        GeoPoint::new(0.001, -0.001),
    ]);
    mask_grid(&mut grid, vec![ring]);
    let pois = vec![Poi::new(0.0, 0.0, 1.0), Poi::new(50.0, 50.0, 1.0)];
    ingest_pois(&mut grid, pois);
    assert_eq!(grid.pois_inside.len(), 1);
}

#[test]
fn bad_poi_sign_semantics() {
    assert!(Poi::new(0.0, 0.0, -5.0).is_bad());
    assert!(!Poi::new(0.0, 0.0, 5.0).is_bad());
    assert!(!Poi::new(0.0, 0.0, 0.0).is_bad());
}

#[test]
fn cache_round_trip_preserves_fields() {
    let mut grid = small_grid();
    grid.risk[0] = 0.42;
    grid.rl[0] = 2;
    grid.is_road[4] = true;
    let records = grid.to_records();

    let mut fresh = small_grid();
    fresh.load_records(records);

    assert_eq!(fresh.risk[0], 0.42);
    assert_eq!(fresh.rl[0], 2);
    assert!(fresh.is_road[4]);
}

#[test]
fn cellid_indexing_matches_grid() {
    let grid = small_grid();
    let id = CellId(grid.grid_x + 1);
    let (x, y) = grid.xy(id);
    assert_eq!(x, 1);
    assert_eq!(y, 1);
}
