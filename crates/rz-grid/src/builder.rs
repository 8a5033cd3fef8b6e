//! Grid construction from a bounding box and a cell edge length (§4.1).
//!
//! # Usage
//!
//! ```rust
//! use rz_grid::GridBuilder;
//!
//! let grid = GridBuilder::new(-88.05, 30.60, -87.95, 30.70, 100.0, 4)
//!     .build();
//! assert!(grid.grid_x > 0 && grid.grid_y > 0);
//! assert_eq!(grid.lat.len(), grid.cell_count());
//! ```

use rz_core::BBox;

use crate::cell::{EduType, Grid};

/// Builds a [`Grid`] from a bbox and a desired cell edge length in meters.
pub struct GridBuilder {
    bbox: BBox,
    zone_size: f64,
    m: u32,
}

impl GridBuilder {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64, zone_size: f64, m: u32) -> Self {
        Self {
            bbox: BBox { left, bottom, right, top },
            zone_size,
            m,
        }
    }

    pub fn from_bbox(bbox: BBox, zone_size: f64, m: u32) -> Self {
        Self { bbox, zone_size, m }
    }

    /// Compute dimensions and materialize every cell center.
    ///
    /// `grid_x`/`grid_y` are `floor(width_m / zone_size)` /
    /// `floor(height_m / zone_size)`, per §4.1; both widths are measured with
    /// haversine distance along the bbox edges. A degenerate bbox (too small
    /// relative to `zone_size` to fit even one row/column) yields
    /// `grid_x = 0` or `grid_y = 0` and an empty cell array — the caller
    /// (the CLI driver) is expected to treat zero cells as a configuration
    /// problem rather than the grid layer panicking on it.
    pub fn build(self) -> Grid {
        let width_m = self.bbox.width_m();
        let height_m = self.bbox.height_m();

        let grid_x = (width_m / self.zone_size).floor().max(0.0) as u32;
        let grid_y = (height_m / self.zone_size).floor().max(0.0) as u32;

        let count = (grid_x as usize) * (grid_y as usize);

        let mut lat = Vec::with_capacity(count);
        let mut lon = Vec::with_capacity(count);

        let width_deg = self.bbox.right - self.bbox.left;
        let height_deg = self.bbox.top - self.bbox.bottom;

        for y in 0..grid_y {
            for x in 0..grid_x {
                let cx = self.bbox.left + (x as f64 + 0.5) * (width_deg / grid_x as f64);
                let cy = self.bbox.bottom + (y as f64 + 0.5) * (height_deg / grid_y as f64);
                lon.push(cx);
                lat.push(cy);
            }
        }

        let zones_inside: Vec<_> = (0..count as u32).map(rz_core::CellId).collect();

        Grid {
            left: self.bbox.left,
            bottom: self.bbox.bottom,
            right: self.bbox.right,
            top: self.bbox.top,
            zone_size: self.zone_size,
            grid_x,
            grid_y,
            m: self.m,
            inside: vec![true; count],
            risk: vec![1.0; count],
            risk_elevation: vec![None; count],
            rl: vec![self.m; count],
            is_road: vec![false; count],
            is_river: vec![false; count],
            urban_prob: vec![0.0; count],
            elevation: vec![0.0; count],
            slope: vec![0.0; count],
            dpconn: vec![0.0; count],
            has_edu: vec![false; count],
            edu_type: vec![EduType::None; count],
            lat,
            lon,
            rings: Vec::new(),
            zones_inside,
            pois: Vec::new(),
            pois_inside: Vec::new(),
            roads_points: 0,
            edus: vec![Vec::new(); (self.m as usize) + 1],
        }
    }
}
