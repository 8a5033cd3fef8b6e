//! Incremental line-walk road/river rasterization (§4.3).
//!
//! For each segment, one axis is dominant (the one with the larger index
//! delta) and the walk steps one cell at a time along it, accumulating a
//! fractional carry on the minor axis. The walk terminates as soon as the
//! haversine distance to the target cell stops decreasing — a guard against
//! drift in the Bresenham-style accumulator on highly oblique segments.
//!
//! Cells are tracked as `(x, y)` pairs rather than a flat row-major index
//! while walking. The reference implementation accumulates a flat index
//! directly (`id += num_x`, `id += num_y`), which can step past a row
//! boundary without detection when the minor-axis carry and major-axis step
//! combine awkwardly (§9). Tracking `(x, y)` separately and bounds-checking
//! each axis independently avoids that class of bug structurally: a step
//! that would leave the grid terminates the walk for that segment instead of
//! wrapping into an unrelated row.

use rz_core::CellId;
use rz_grid::Grid;

use crate::error::{RasterError, RasterResult};
use crate::segment::{RiverSegment, RoadSegment};

#[inline]
fn signum_i64(v: i64) -> i64 {
    v.signum()
}

/// Walk from cell `a` to cell `b`, invoking `mark` on every intermediate
/// cell touched (not including `a`, which the caller marks separately).
fn walk_segment(grid: &Grid, a: (u32, u32), b: (u32, u32), mut mark: impl FnMut(CellId)) {
    let (ax, ay) = (a.0 as i64, a.1 as i64);
    let (bx, by) = (b.0 as i64, b.1 as i64);
    let dist_x = bx - ax;
    let dist_y = by - ay;

    if dist_x == 0 && dist_y == 0 {
        return;
    }

    let b_id = grid.id_of(b.0, b.1);
    let b_center = grid.center(b_id);

    let (mut x, mut y) = (ax, ay);
    let mut prev_dist = grid.center(grid.id_of(a.0, a.1)).distance_m(b_center);
    let mut dist = prev_dist;

    if dist_x.abs() >= dist_y.abs() {
        // X-dominant walk.
        if dist_x == 0 {
            return;
        }
        let step_y = if dist_y > 0 {
            (dist_y + 1) as f64 / (dist_x.abs() + 1) as f64
        } else {
            (dist_y - 1) as f64 / (dist_x.abs() + 1) as f64
        };
        let num_x = signum_i64(dist_x);
        let num_y = signum_i64(dist_y);
        let mut delta_y = 0.0_f64;

        loop {
            if dist > prev_dist {
                break;
            }
            x += num_x;
            delta_y += step_y;
            if delta_y.abs() >= 1.0 {
                y += num_y;
                delta_y -= delta_y.signum();
            }
            if !grid.in_bounds(x, y) {
                break;
            }
            let id = grid.id_of(x as u32, y as u32);
            mark(id);
            prev_dist = dist;
            dist = grid.center(id).distance_m(b_center);
        }
    } else {
        // Y-dominant walk.
        if dist_y == 0 {
            return;
        }
        let step_x = if dist_x > 0 {
            (dist_x + 1) as f64 / (dist_y.abs() + 1) as f64
        } else {
            (dist_x - 1) as f64 / (dist_y.abs() + 1) as f64
        };
        let num_y = signum_i64(dist_y);
        let num_x = signum_i64(dist_x);
        let mut delta_x = 0.0_f64;

        loop {
            if dist > prev_dist {
                break;
            }
            y += num_y;
            delta_x += step_x;
            if delta_x.abs() >= 1.0 {
                x += num_x;
                delta_x -= delta_x.signum();
            }
            if !grid.in_bounds(x, y) {
                break;
            }
            let id = grid.id_of(x as u32, y as u32);
            mark(id);
            prev_dist = dist;
            dist = grid.center(id).distance_m(b_center);
        }
    }
}

/// Endpoint cell for a geographic coordinate, or `None` if outside the bbox.
fn endpoint_cell(grid: &Grid, p: rz_core::GeoPoint) -> Option<(u32, u32)> {
    if p.lon < grid.left || p.lon > grid.right || p.lat < grid.bottom || p.lat > grid.top {
        return None;
    }
    let width = (grid.right - grid.left).abs();
    let height = (grid.top - grid.bottom).abs();
    let prop_x = (p.lon - grid.left) / width;
    let prop_y = (p.lat - grid.bottom) / height;
    let x = ((prop_x * grid.grid_x as f64) as i64).clamp(0, grid.grid_x as i64 - 1) as u32;
    let y = ((prop_y * grid.grid_y as f64) as i64).clamp(0, grid.grid_y as i64 - 1) as u32;
    Some((x, y))
}

/// Rasterize every road segment onto the grid, setting `is_road` (§4.3).
/// Segments with either endpoint outside the bbox are skipped entirely.
/// `roads_points` is set to the final count of `is_road` cells.
pub fn rasterize_roads(grid: &mut Grid, segments: &[RoadSegment]) -> RasterResult<()> {
    if grid.cell_count() == 0 {
        return Err(RasterError::EmptyGrid);
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let touched: Vec<Vec<CellId>> = segments
            .par_iter()
            .map(|seg| rasterize_one(grid, seg.start, seg.end))
            .collect();
        for ids in touched {
            for id in ids {
                grid.is_road[id.index()] = true;
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        for seg in segments {
            for id in rasterize_one(grid, seg.start, seg.end) {
                grid.is_road[id.index()] = true;
            }
        }
    }

    grid.roads_points = grid.is_road.iter().filter(|&&r| r).count() as u32;
    log::info!("road rasterization: {} cells marked is_road", grid.roads_points);
    Ok(())
}

/// Rasterize every river segment onto the grid, setting `is_river` (§4.3).
/// Layered output only — never factored into PoI risk.
pub fn rasterize_rivers(grid: &mut Grid, segments: &[RiverSegment]) -> RasterResult<()> {
    if grid.cell_count() == 0 {
        return Err(RasterError::EmptyGrid);
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let touched: Vec<Vec<CellId>> = segments
            .par_iter()
            .map(|seg| rasterize_one(grid, seg.start, seg.end))
            .collect();
        for ids in touched {
            for id in ids {
                grid.is_river[id.index()] = true;
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        for seg in segments {
            for id in rasterize_one(grid, seg.start, seg.end) {
                grid.is_river[id.index()] = true;
            }
        }
    }

    let river_points = grid.is_river.iter().filter(|&&r| r).count();
    log::info!("river rasterization: {} cells marked is_river", river_points);
    Ok(())
}

/// Rasterize one segment, returning every cell touched (both endpoints plus
/// the walked path). Collected into a `Vec` rather than written directly so
/// the parallel path can merge results by OR without workers racing on the
/// shared grid.
fn rasterize_one(grid: &Grid, start: rz_core::GeoPoint, end: rz_core::GeoPoint) -> Vec<CellId> {
    let (Some(a), Some(b)) = (endpoint_cell(grid, start), endpoint_cell(grid, end)) else {
        return Vec::new();
    };

    let mut touched = Vec::new();
    touched.push(grid.id_of(a.0, a.1));
    touched.push(grid.id_of(b.0, b.1));
    walk_segment(grid, a, b, |id| touched.push(id));
    touched
}
