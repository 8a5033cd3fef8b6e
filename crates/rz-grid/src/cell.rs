//! The cell grid: a struct-of-arrays store of one record per grid cell.
//!
//! Every per-cell field lives in its own flat `Vec`, indexed by
//! [`CellId`][rz_core::CellId]`::index()`. This is deliberate: every
//! parallel stage in `rz-risk`/`rz-raster` reads one or two of these arrays
//! and writes exactly one, so the arrays can be handed to worker threads as
//! plain read-only slices with no cell-to-cell aliasing to reason about.

use rz_core::{CellId, GeoPoint};

/// Placement state of a cell once an EDU positioning policy has run.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EduType {
    #[default]
    None,
    Loose,
    Tight,
}

/// One row-major snapshot of a cell's fields, used to (de)serialize the
/// cache file. Mirrors the JSON shape the reference implementation dumps
/// (one object per zone), field for field.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRecord {
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
    pub inside: bool,
    pub risk: f64,
    pub risk_elevation: Option<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "RL"))]
    pub rl: u32,
    pub is_road: bool,
    pub is_river: bool,
    pub urban_prob: f64,
    pub elevation: f64,
    pub slope: f64,
    pub dpconn: f64,
    pub has_edu: bool,
    pub edu_type: EduType,
}

/// The grid: bbox, dimensions, and every per-cell array.
///
/// `grid_x * grid_y` cells are created once by [`GridBuilder`][crate::GridBuilder]
/// and never destroyed; every later stage mutates the arrays in place.
pub struct Grid {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
    pub zone_size: f64,
    pub grid_x: u32,
    pub grid_y: u32,
    pub m: u32,

    // ── Per-cell arrays (length = grid_x * grid_y) ──────────────────────
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub inside: Vec<bool>,
    pub risk: Vec<f64>,
    pub risk_elevation: Vec<Option<f64>>,
    pub rl: Vec<u32>,
    pub is_road: Vec<bool>,
    pub is_river: Vec<bool>,
    pub urban_prob: Vec<f64>,
    pub elevation: Vec<f64>,
    pub slope: Vec<f64>,
    pub dpconn: Vec<f64>,
    pub has_edu: Vec<bool>,
    pub edu_type: Vec<EduType>,

    /// AoI polygon rings. Outer rings only (§4.2).
    pub rings: Vec<crate::aoi::Ring>,

    /// Sorted, deduplicated ids of cells with `inside = true`.
    pub zones_inside: Vec<CellId>,

    /// All ingested PoIs.
    pub pois: Vec<crate::poi::Poi>,
    /// PoIs that fall inside the AoI (subset of `pois`, or all of them if no
    /// AoI was configured).
    pub pois_inside: Vec<crate::poi::Poi>,

    /// Count of cells with `is_road = true`, recomputed after rasterization.
    pub roads_points: u32,

    /// Per-RL EDU lists, 1-indexed; `edus[0]` is always empty.
    pub edus: Vec<Vec<CellId>>,
}

impl Grid {
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.grid_x as usize) * (self.grid_y as usize)
    }

    /// Row-major `(x, y)` of a cell id.
    #[inline]
    pub fn xy(&self, id: CellId) -> (u32, u32) {
        let idx = id.0;
        (idx % self.grid_x, idx / self.grid_x)
    }

    /// Row-major id of a `(x, y)` coordinate. Does not bounds-check.
    #[inline]
    pub fn id_of(&self, x: u32, y: u32) -> CellId {
        CellId(y * self.grid_x + x)
    }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.grid_x && (y as u32) < self.grid_y
    }

    #[inline]
    pub fn center(&self, id: CellId) -> GeoPoint {
        GeoPoint::new(self.lat[id.index()], self.lon[id.index()])
    }

    /// Euclidean distance between two cells in grid-space (units = cells),
    /// per §4.1.
    pub fn grid_distance(&self, a: CellId, b: CellId) -> f64 {
        let (ax, ay) = self.xy(a);
        let (bx, by) = self.xy(b);
        let dx = ax as f64 - bx as f64;
        let dy = ay as f64 - by as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Combined risk used for RL quantization: `risk * risk_elevation` when
    /// an elevation layer is present, else bare `risk` (§4.5/§4.6).
    pub fn combined_risk(&self, id: CellId) -> f64 {
        let base = self.risk[id.index()];
        match self.risk_elevation[id.index()] {
            Some(h) => base * h,
            None => base,
        }
    }

    /// Rebuild `zones_inside` from the `inside` array, sorted and deduplicated
    /// (§3 invariant: always sorted when serialization is requested).
    pub fn rebuild_zones_inside(&mut self) {
        self.zones_inside = (0..self.cell_count() as u32)
            .map(CellId)
            .filter(|id| self.inside[id.index()])
            .collect();
    }

    /// Snapshot every cell into [`CellRecord`]s in id order, for cache
    /// serialization (§4.13).
    pub fn to_records(&self) -> Vec<CellRecord> {
        (0..self.cell_count() as u32)
            .map(|i| {
                let id = CellId(i);
                let idx = id.index();
                CellRecord {
                    id: i,
                    lat: self.lat[idx],
                    lon: self.lon[idx],
                    inside: self.inside[idx],
                    risk: self.risk[idx],
                    risk_elevation: self.risk_elevation[idx],
                    rl: self.rl[idx],
                    is_road: self.is_road[idx],
                    is_river: self.is_river[idx],
                    urban_prob: self.urban_prob[idx],
                    elevation: self.elevation[idx],
                    slope: self.slope[idx],
                    dpconn: self.dpconn[idx],
                    has_edu: self.has_edu[idx],
                    edu_type: self.edu_type[idx].clone(),
                }
            })
            .collect()
    }

    /// Overwrite every per-cell array from `records` (cache load, §4.13).
    /// Records are sorted by id first, mirroring the reference's
    /// `zones.sort(key=lambda zone: zone['id'])` before use. Dimensions are
    /// not re-derived from the records — the caller (rz-io) is responsible
    /// for validating that `records.len() == self.cell_count()`.
    pub fn load_records(&mut self, mut records: Vec<CellRecord>) {
        records.sort_by_key(|r| r.id);
        for r in records {
            let idx = r.id as usize;
            self.lat[idx] = r.lat;
            self.lon[idx] = r.lon;
            self.inside[idx] = r.inside;
            self.risk[idx] = r.risk;
            self.risk_elevation[idx] = r.risk_elevation;
            self.rl[idx] = r.rl;
            self.is_road[idx] = r.is_road;
            self.is_river[idx] = r.is_river;
            self.urban_prob[idx] = r.urban_prob;
            self.elevation[idx] = r.elevation;
            self.slope[idx] = r.slope;
            self.dpconn[idx] = r.dpconn;
            self.has_edu[idx] = r.has_edu;
            self.edu_type[idx] = r.edu_type;
        }
        self.rebuild_zones_inside();
    }
}
