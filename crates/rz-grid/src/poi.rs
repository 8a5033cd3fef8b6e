//! Weighted Points of Interest: ingest and AoI filtering (§3, §4.2).

use rz_core::GeoPoint;

use crate::aoi::point_in_any_ring;
use crate::cell::Grid;

/// A weighted Point of Interest. Positive weight = safety asset (good PoI);
/// negative weight = hazard (bad PoI). `badpoi` is always derived from the
/// sign of `weight`, never an independent field (§9 decision).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Poi {
    pub lat: f64,
    pub lon: f64,
    pub weight: f64,
}

impl Poi {
    pub fn new(lat: f64, lon: f64, weight: f64) -> Self {
        Self { lat, lon, weight }
    }

    #[inline]
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    #[inline]
    pub fn is_bad(&self) -> bool {
        self.weight < 0.0
    }
}

/// Attach PoIs to the grid and filter them to the AoI (§4.2, §4.3 of
/// SPEC_FULL). When no AoI rings are configured, every PoI is treated as
/// inside, matching the `pois_use_all` fallback in the reference driver.
pub fn ingest_pois(grid: &mut Grid, pois: Vec<Poi>) {
    grid.pois = pois;

    if grid.rings.is_empty() {
        grid.pois_inside = grid.pois.clone();
    } else {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            grid.pois_inside = grid
                .pois
                .par_iter()
                .filter(|p| point_in_any_ring(p.point(), &grid.rings))
                .copied()
                .collect();
        }
        #[cfg(not(feature = "parallel"))]
        {
            grid.pois_inside = grid
                .pois
                .iter()
                .filter(|p| point_in_any_ring(p.point(), &grid.rings))
                .copied()
                .collect();
        }
    }

    log::info!("{} of {} PoIs inside the AoI", grid.pois_inside.len(), grid.pois.len());
    if grid.pois_inside.is_empty() {
        log::warn!("no PoIs inside the AoI; risk defaults to a uniform constant");
    }
}
