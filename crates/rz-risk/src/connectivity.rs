//! DPConn connectivity overlay (§4.7).
//!
//! Access points cover cells within their `range_m`; each access-point type
//! contributes a fixed per-type score `σ(t) = wS·S_t + wT·T_t + wR·R_t − wC·C_t`.
//! A cell's `dpconn` is the share of the global score total contributed by
//! the types that actually reach it.
//!
//! The per-type `sigma` lookup and per-cell covered-type set are hot in the
//! per-cell inner loop (§5 parallelizes this stage over every AoI-inside
//! cell), so they use `rustc_hash`'s non-cryptographic hasher rather than
//! std's SipHash-keyed default.

use std::collections::HashMap;

use rustc_hash::{FxHashMap, FxHashSet};

use rz_core::GeoPoint;
use rz_grid::Grid;

/// Per-type connectivity parameters, §4.7.
#[derive(Copy, Clone, Debug, Default)]
pub struct TypeParams {
    pub s: f64,
    pub t: f64,
    pub r: f64,
    pub c: f64,
}

/// Global weights applied to every type's parameters.
#[derive(Copy, Clone, Debug)]
pub struct ConnWeights {
    pub w_s: f64,
    pub w_t: f64,
    pub w_r: f64,
    pub w_c: f64,
}

/// One access point: a coverage circle of a given type.
#[derive(Clone, Debug)]
pub struct AccessPoint {
    pub lat: f64,
    pub lon: f64,
    pub range_m: f64,
    pub kind: String,
}

/// Score every AoI-inside cell's `dpconn` (§4.7). If the weighted type-score
/// total is zero, or no cell is covered by any access point, `dpconn` stays
/// `0.0` everywhere (the grid default).
pub fn score_connectivity(
    grid: &mut Grid,
    access_points: &[AccessPoint],
    params: &HashMap<String, TypeParams>,
    weights: ConnWeights,
) {
    let sigma: FxHashMap<&str, f64> = params
        .iter()
        .map(|(kind, p)| {
            let score = weights.w_s * p.s + weights.w_t * p.t + weights.w_r * p.r - weights.w_c * p.c;
            (kind.as_str(), score)
        })
        .collect();

    let total: f64 = sigma.values().sum();
    if total == 0.0 || access_points.is_empty() {
        log::warn!("connectivity score total is zero or no access points supplied; dpconn left at 0.0");
        return;
    }

    let lats = &grid.lat;
    let lons = &grid.lon;

    let score_cell = |lat: f64, lon: f64| -> f64 {
        let z = GeoPoint::new(lat, lon);
        let mut covered: FxHashSet<&str> = FxHashSet::default();
        for ap in access_points {
            if covered.contains(ap.kind.as_str()) {
                continue;
            }
            let d = z.distance_m(GeoPoint::new(ap.lat, ap.lon));
            if d <= ap.range_m {
                covered.insert(ap.kind.as_str());
            }
        }
        let sum: f64 = covered.iter().filter_map(|k| sigma.get(k)).sum();
        sum / total
    };

    #[cfg(feature = "parallel")]
    let scored: Vec<(usize, f64)> = {
        use rayon::prelude::*;
        grid.zones_inside
            .par_iter()
            .map(|&id| {
                let idx = id.index();
                (idx, score_cell(lats[idx], lons[idx]))
            })
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let scored: Vec<(usize, f64)> = grid
        .zones_inside
        .iter()
        .map(|&id| {
            let idx = id.index();
            (idx, score_cell(lats[idx], lons[idx]))
        })
        .collect();

    for (idx, dpconn) in scored {
        grid.dpconn[idx] = dpconn;
    }

    log::info!("connectivity scored for {} inside cells (score total={total:.4})", grid.zones_inside.len());
}
