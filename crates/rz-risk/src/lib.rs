//! `rz-risk` — per-cell risk aggregation, normalization, and RL quantization
//! for the riskzones classification engine.
//!
//! # Pipeline stages (§4.4–§4.8)
//!
//! ```text
//! score_poi_risk          — risk(z) from weighted PoIs
//! score_elevation_risk     — risk_elevation(z) from a terrain layer
//! score_connectivity       — dpconn(z) from access-point coverage
//! score_urban_probability  — urban_prob(z) from road proximity
//! normalize_and_quantize   — min-max normalize combined risk, derive RL
//! ```
//!
//! Elevation and connectivity are optional layers (§4.5/§4.7); when absent,
//! callers simply skip those stages and `normalize_and_quantize` falls back
//! to bare `risk`.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|----------------------------------------------------------------|
//! | `parallel` | Scores PoI/elevation/connectivity risk on Rayon's thread pool. |

pub mod connectivity;
pub mod elevation;
pub mod error;
pub mod normalize;
pub mod poi_risk;
pub mod urban;

#[cfg(test)]
mod tests;

pub use connectivity::{score_connectivity, AccessPoint, ConnWeights, TypeParams};
pub use elevation::score_elevation_risk;
pub use error::{RiskError, RiskResult};
pub use normalize::normalize_and_quantize;
pub use poi_risk::score_poi_risk;
pub use urban::score_urban_probability;
