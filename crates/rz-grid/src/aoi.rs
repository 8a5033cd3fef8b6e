//! Area-of-Interest masking via ray casting (§4.2).
//!
//! Only outer polygon rings are modeled — inner holes (islands) are
//! deliberately not supported, matching the job contract's AoI shape.

use rz_core::GeoPoint;

use crate::cell::Grid;

/// A closed polygon ring: `[lon, lat]` vertices in order. The ring is
/// treated as cyclic — the edge from the last vertex back to the first is
/// always tested.
#[derive(Clone, Debug, Default)]
pub struct Ring(pub Vec<GeoPoint>);

/// Large finite slope surrogate for a vertical polygon edge, matching the
/// reference's `MAX_NUM` guard against a literal division by zero.
const MAX_SLOPE: f64 = 1e10;

#[inline]
fn sign(x: f64) -> i32 {
    if x < 0.0 {
        -1
    } else if x > 0.0 {
        1
    } else {
        0
    }
}

/// Whether the horizontal ray cast eastward from `p` crosses the edge
/// `(e1, e2)` an odd number of times (i.e. this single edge counts as one
/// crossing). Implements the reference's sign-based intersection test: two
/// lines cross iff the endpoints of each line fall on opposite sides of the
/// other.
fn edge_intersects_ray(p: GeoPoint, e1: GeoPoint, e2: GeoPoint) -> bool {
    let a2 = if e1.lon == e2.lon {
        MAX_SLOPE
    } else {
        (e1.lat - e2.lat) / (e1.lon - e2.lon)
    };
    let c2 = e1.lat - a2 * e1.lon;

    let f1_1 = sign(p.lat - e1.lat);
    let f1_2 = sign(p.lat - e2.lat);
    let f2_1 = sign(a2 * p.lon - p.lat + c2);
    let f2_2 = sign(a2 * (p.lon + 180.0) - p.lat + c2);

    f1_1 != f1_2 && f2_1 != f2_2
}

/// Ray-casting point-in-polygon test for one ring (§4.2).
///
/// Only edges whose lon-extent reaches at least `p.lon` and whose lat-extent
/// straddles `p.lat` are tested — this is a pre-filter, not a correctness
/// relaxation, since any edge failing it cannot intersect the eastward ray.
pub fn point_in_ring(p: GeoPoint, ring: &Ring) -> bool {
    let verts = &ring.0;
    let n = verts.len();
    if n < 3 {
        return false;
    }

    let mut crossings = 0u32;
    for i in 0..n {
        // Cyclic: pairs (n-1,0), (0,1), ..., (n-2,n-1) — matches the
        // reference's `range(-1, len(polygon) - 1)` iteration.
        let e1 = verts[(i + n - 1) % n];
        let e2 = verts[i];

        let lat_straddles = (e1.lat <= p.lat && p.lat <= e2.lat) || (e2.lat <= p.lat && p.lat <= e1.lat);
        let lon_reaches = e1.lon >= p.lon || e2.lon >= p.lon;

        if lon_reaches && lat_straddles && edge_intersects_ray(p, e1, e2) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

/// A point is inside the AoI iff it lies inside at least one ring (§4.2).
pub fn point_in_any_ring(p: GeoPoint, rings: &[Ring]) -> bool {
    rings.iter().any(|r| point_in_ring(p, r))
}

/// Mark every cell `inside` iff its center falls within at least one AoI
/// ring, then rebuild `zones_inside`. A no-op (idempotent) when re-run with
/// the same rings, as required by §8's round-trip property.
pub fn mask_grid(grid: &mut Grid, rings: Vec<Ring>) {
    grid.rings = rings;

    if grid.rings.is_empty() {
        // No AoI polygon configured: every cell stays inside (the default
        // from GridBuilder), matching the "not filtering by AoI polygon"
        // warning path in the reference driver.
        grid.rebuild_zones_inside();
        return;
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        let rings = &grid.rings;
        grid.inside = (0..grid.cell_count() as u32)
            .into_par_iter()
            .map(|i| {
                let id = rz_core::CellId(i);
                point_in_any_ring(grid.center(id), rings)
            })
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    {
        for i in 0..grid.cell_count() as u32 {
            let id = rz_core::CellId(i);
            grid.inside[id.index()] = point_in_any_ring(grid.center(id), &grid.rings);
        }
    }

    grid.rebuild_zones_inside();
    log::info!(
        "AoI masking: {} of {} cells inside",
        grid.zones_inside.len(),
        grid.cell_count()
    );
}
