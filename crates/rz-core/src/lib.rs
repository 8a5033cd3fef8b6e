//! `rz-core` — foundational types for the riskzones classification engine.
//!
//! This crate is a dependency of every other `rz-*` crate. It intentionally
//! has no `rz-*` dependencies and minimal external ones (`rand`, `thiserror`,
//! `log`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `CellId`                                               |
//! | [`geo`]      | `GeoPoint`, haversine distance, bbox helpers            |
//! | [`rng`]      | `ClassifierRng` (seeded, used by the Random EDU policy) |
//! | [`config`]   | `JobDescriptor`, `EduAlg`, validation                   |
//! | [`error`]    | `RzError`, `RzResult`, `ExitCode`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. Required  |
//! |         | by `rz-io`'s cache and job-descriptor (de)serialization.       |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EduAlg, EduCounts, JobDescriptor, PoiTypeTable};
pub use error::{ExitCode, RzError, RzResult};
pub use geo::GeoPoint;
pub use ids::CellId;
pub use rng::ClassifierRng;
