//! Unit tests for road/river rasterization.

use rz_core::GeoPoint;
use rz_grid::GridBuilder;

use crate::segment::RoadSegment;
use crate::walk::rasterize_roads;

fn small_grid() -> rz_grid::Grid {
    // ~1km x 1km box centered at (0,0), 100m cells -> ~9x9 grid.
    GridBuilder::new(-0.0045, -0.0045, 0.0045, 0.0045, 100.0, 4).build()
}

#[test]
fn road_crossing_marks_endpoints_and_path() {
    let mut grid = small_grid();
    let seg = RoadSegment::new(
        GeoPoint::new(grid.bottom, grid.left),
        GeoPoint::new(grid.top, grid.right),
    );
    rasterize_roads(&mut grid, &[seg]).unwrap();

    let start_id = grid.id_of(0, 0);
    let end_id = grid.id_of(grid.grid_x - 1, grid.grid_y - 1);
    assert!(grid.is_road[start_id.index()]);
    assert!(grid.is_road[end_id.index()]);

    let touched = grid.is_road.iter().filter(|&&r| r).count();
    assert!(touched >= 2);
    assert_eq!(grid.roads_points, touched as u32);
}

#[test]
fn segment_outside_bbox_is_skipped() {
    let mut grid = small_grid();
    let seg = RoadSegment::new(GeoPoint::new(50.0, 50.0), GeoPoint::new(51.0, 51.0));
    rasterize_roads(&mut grid, &[seg]).unwrap();
    assert_eq!(grid.roads_points, 0);
}

#[test]
fn single_cell_segment_marks_only_that_cell() {
    let mut grid = small_grid();
    let c = grid.center(grid.id_of(3, 3));
    let seg = RoadSegment::new(c, c);
    rasterize_roads(&mut grid, &[seg]).unwrap();
    assert_eq!(grid.roads_points, 1);
    assert!(grid.is_road[grid.id_of(3, 3).index()]);
}

#[test]
fn horizontal_segment_walks_along_single_row() {
    let mut grid = small_grid();
    let a = grid.center(grid.id_of(0, 4));
    let b = grid.center(grid.id_of(grid.grid_x - 1, 4));
    let seg = RoadSegment::new(a, b);
    rasterize_roads(&mut grid, &[seg]).unwrap();

    for x in 0..grid.grid_x {
        assert!(grid.is_road[grid.id_of(x, 4).index()], "cell ({x},4) should be marked");
    }
    assert!(!grid.is_road[grid.id_of(0, 0).index()]);
}

#[test]
fn roads_points_recomputed_after_multiple_segments() {
    let mut grid = small_grid();
    let seg1 = RoadSegment::new(grid.center(grid.id_of(0, 0)), grid.center(grid.id_of(2, 0)));
    let seg2 = RoadSegment::new(grid.center(grid.id_of(0, 5)), grid.center(grid.id_of(2, 5)));
    rasterize_roads(&mut grid, &[seg1, seg2]).unwrap();
    let expected = grid.is_road.iter().filter(|&&r| r).count() as u32;
    assert_eq!(grid.roads_points, expected);
    assert!(grid.roads_points >= 6);
}

#[test]
fn empty_grid_rasterization_errors() {
    let mut grid = GridBuilder::new(0.0, 0.0, 0.0000001, 0.0000001, 100.0, 4).build();
    let seg = RoadSegment::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 0.0));
    assert!(rasterize_roads(&mut grid, &[seg]).is_err());
}
