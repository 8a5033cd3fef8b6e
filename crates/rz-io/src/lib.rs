//! `rz-io` — the thin input/output collaborator layer around the riskzones
//! classification core: OSM XML and AoI GeoJSON ingest, cache
//! (de)serialization, per-layer CSV output, and the access-point/elevation
//! service traits. The core (`rz-grid`, `rz-raster`, `rz-risk`,
//! `rz-placement`) never parses a file or opens a socket itself — it
//! consumes the plain data these modules hand it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|---------------------------------------------------------------|
//! | [`job`]     | External JSON job descriptor → `JobDescriptor` (§6, §4.11)      |
//! | [`osm`]     | OSM XML → `Poi`/`RoadSegment`/`RiverSegment` (§6)              |
//! | [`aoi`]     | AoI GeoJSON → `Ring`s (§6)                                      |
//! | [`cache`]   | Cache file (de)serialization (§4.13)                            |
//! | [`output`]  | Per-layer CSV writers and the `res_data` summary (§6, §4.10)    |
//! | [`sources`] | `AccessPointSource`/`ElevationSource` traits + implementations  |
//! | [`error`]   | `IoError`, `IoResult<T>`                                         |
//!
//! # Feature flags
//!
//! | Flag   | Effect                                                            |
//! |--------|----------------------------------------------------------------------|
//! | `http` | Adds `sources::http::HttpSources`, a blocking `reqwest`-backed        |
//! |        | implementation of both service traits, for use against the live      |
//! |        | access-point and elevation services.                                 |

pub mod aoi;
pub mod cache;
pub mod error;
pub mod job;
pub mod osm;
pub mod output;
pub mod sources;

#[cfg(test)]
mod tests;

pub use error::{IoError, IoResult};
pub use job::load_job_descriptor;
pub use osm::{parse_osm, OsmData};
pub use sources::{
    AccessPointSource, ElevationSource, FileAccessPointSource, FileElevationSource,
    ELEVATION_BATCH_SIZE,
};

#[cfg(feature = "http")]
pub use sources::http::HttpSources;
