//! Plain line-segment data produced by the OSM input collaborator (§6).

use rz_core::GeoPoint;

/// A road polyline segment between two consecutive OSM way nodes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoadSegment {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl RoadSegment {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }
}

/// A river polyline segment, rasterized identically to roads but into a
/// separate `is_river` flag (§4.3) — never factored into PoI risk.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RiverSegment {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl RiverSegment {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }
}
