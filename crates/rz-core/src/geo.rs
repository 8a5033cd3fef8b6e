//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude, not the `f32` the wider corpus
//! favors for agent positions: the ray-casting AoI test and the slope
//! computation are sensitive to cancellation near polygon edges and small
//! elevation deltas, and the grid can span up to 10^7 cells where f32
//! rounding in the accumulated bbox width/height would visibly skew cell
//! centers. `f64` matches the precision the reference arithmetic assumes.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Mean Earth radius in meters, per the job contract (§4.1).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in meters.
    ///
    /// Uses the numerically stable `atan2` form rather than the reference's
    /// `asin(sqrt(...))` form; both are the same formula algebraically and
    /// agree to within floating-point rounding, but `atan2` avoids the NaN
    /// that `asin` produces when its argument drifts fractionally above 1.0
    /// for antipodal-ish inputs.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Approximate bounding-box check — cheaper than `distance_m` for quick
    /// rejection before a precise haversine computation.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg && (self.lon - center.lon).abs() <= half_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// A rectangular geographic bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl BBox {
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lon >= self.left && p.lon <= self.right && p.lat >= self.bottom && p.lat <= self.top
    }

    /// Physical width of the bbox in meters, measured along its bottom edge.
    pub fn width_m(&self) -> f64 {
        GeoPoint::new(self.bottom, self.left).distance_m(GeoPoint::new(self.bottom, self.right))
    }

    /// Physical height of the bbox in meters, measured along its left edge.
    pub fn height_m(&self) -> f64 {
        GeoPoint::new(self.bottom, self.left).distance_m(GeoPoint::new(self.top, self.left))
    }
}
