//! Access-point and elevation collaborators (§6).
//!
//! Both external services are modeled as traits so the core never depends
//! on a transport: a from-file implementation satisfies the trait for
//! tests and offline runs, and (behind the `http` feature) a real HTTP
//! client satisfies it against the live services.

use rz_core::geo::BBox;
use rz_core::GeoPoint;
use rz_risk::AccessPoint;

use crate::error::IoResult;

/// `GET /cells/{left}/{top}/{right}/{bottom}` — returns the access points
/// covering a bounding box.
pub trait AccessPointSource {
    fn access_points(&self, bbox: &BBox) -> IoResult<Vec<AccessPoint>>;
}

/// `POST /lookup {"locations": [...]}` — returns one elevation per queried
/// point, batched 500 at a time by callers.
pub trait ElevationSource {
    fn elevations(&self, points: &[GeoPoint]) -> IoResult<Vec<f64>>;
}

/// Maximum number of points sent in one elevation request (§6).
pub const ELEVATION_BATCH_SIZE: usize = 500;

// ── From-file implementations ──────────────────────────────────────────────

/// An [`AccessPointSource`] backed by a pre-fetched JSON array of access
/// points, loaded once from disk. Used for tests and cached/offline runs.
pub struct FileAccessPointSource {
    points: Vec<AccessPoint>,
}

#[derive(serde::Deserialize)]
struct RawAccessPoint {
    lat: f64,
    lon: f64,
    range: f64,
    #[serde(rename = "type")]
    kind: String,
}

impl FileAccessPointSource {
    pub fn load(path: &std::path::Path) -> IoResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let raw: Vec<RawAccessPoint> = serde_json::from_str(&text)?;
        let points = raw
            .into_iter()
            .map(|r| AccessPoint {
                lat: r.lat,
                lon: r.lon,
                range_m: r.range,
                kind: r.kind,
            })
            .collect();
        Ok(Self { points })
    }

    pub fn from_points(points: Vec<AccessPoint>) -> Self {
        Self { points }
    }
}

impl AccessPointSource for FileAccessPointSource {
    fn access_points(&self, bbox: &BBox) -> IoResult<Vec<AccessPoint>> {
        Ok(self
            .points
            .iter()
            .filter(|p| bbox.contains(GeoPoint::new(p.lat, p.lon)))
            .cloned()
            .collect())
    }
}

/// An [`ElevationSource`] backed by a pre-fetched `lat,lon,elevation` table.
/// A lookup falls back to `0.0` for any point not present in the table
/// (mirrors a sparse DEM sample set), logging a warning.
pub struct FileElevationSource {
    table: std::collections::HashMap<(u64, u64), f64>,
}

impl FileElevationSource {
    fn key(p: GeoPoint) -> (u64, u64) {
        (p.lat.to_bits(), p.lon.to_bits())
    }

    pub fn load(path: &std::path::Path) -> IoResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let mut table = std::collections::HashMap::new();
        for record in rdr.records() {
            let record = record?;
            let lat: f64 = record.get(0).and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let lon: f64 = record.get(1).and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let elevation: f64 = record.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.0);
            table.insert(Self::key(GeoPoint::new(lat, lon)), elevation);
        }
        Ok(Self { table })
    }
}

impl ElevationSource for FileElevationSource {
    fn elevations(&self, points: &[GeoPoint]) -> IoResult<Vec<f64>> {
        Ok(points
            .iter()
            .map(|&p| {
                self.table.get(&Self::key(p)).copied().unwrap_or_else(|| {
                    log::warn!("no elevation sample for ({}, {}); defaulting to 0.0", p.lat, p.lon);
                    0.0
                })
            })
            .collect())
    }
}

// ── HTTP implementations (`http` feature) ──────────────────────────────────

#[cfg(feature = "http")]
pub mod http {
    use serde::Deserialize;

    use super::*;

    /// Queries the live access-point and elevation services over HTTP,
    /// using a blocking `reqwest` client (the core has no async runtime).
    pub struct HttpSources {
        client: reqwest::blocking::Client,
        access_point_base: String,
        elevation_url: String,
    }

    impl HttpSources {
        pub fn new(access_point_base: impl Into<String>, elevation_url: impl Into<String>) -> Self {
            Self {
                client: reqwest::blocking::Client::new(),
                access_point_base: access_point_base.into(),
                elevation_url: elevation_url.into(),
            }
        }
    }

    #[derive(Deserialize)]
    struct RawAccessPoint {
        lat: f64,
        lon: f64,
        range: f64,
        #[serde(rename = "type")]
        kind: String,
    }

    impl AccessPointSource for HttpSources {
        fn access_points(&self, bbox: &BBox) -> IoResult<Vec<AccessPoint>> {
            let url = format!(
                "{}/cells/{}/{}/{}/{}",
                self.access_point_base, bbox.left, bbox.top, bbox.right, bbox.bottom
            );
            let raw: Vec<RawAccessPoint> = self.client.get(url).send()?.json()?;
            Ok(raw
                .into_iter()
                .map(|r| AccessPoint { lat: r.lat, lon: r.lon, range_m: r.range, kind: r.kind })
                .collect())
        }
    }

    #[derive(serde::Serialize)]
    struct LocationReq {
        latitude: f64,
        longitude: f64,
    }

    #[derive(serde::Serialize)]
    struct LookupReq {
        locations: Vec<LocationReq>,
    }

    #[derive(Deserialize)]
    struct LookupResultItem {
        elevation: f64,
    }

    #[derive(Deserialize)]
    struct LookupResp {
        results: Vec<LookupResultItem>,
    }

    impl ElevationSource for HttpSources {
        fn elevations(&self, points: &[GeoPoint]) -> IoResult<Vec<f64>> {
            let mut out = Vec::with_capacity(points.len());
            for batch in points.chunks(super::ELEVATION_BATCH_SIZE) {
                let body = LookupReq {
                    locations: batch.iter().map(|p| LocationReq { latitude: p.lat, longitude: p.lon }).collect(),
                };
                let resp: LookupResp = self.client.post(&self.elevation_url).json(&body).send()?.json()?;
                out.extend(resp.results.into_iter().map(|r| r.elevation));
            }
            Ok(out)
        }
    }
}
