//! `rz-grid` — the cell grid: construction, AoI masking, and PoI ingest.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|---------------------------------------------------------------|
//! | [`cell`]    | `EduType`, `Poi`, the `Grid` struct-of-arrays cell storage     |
//! | [`builder`] | `GridBuilder` — dimensions + cell centers from a bbox          |
//! | [`aoi`]     | `Ring`, ray-casting AoI masking                                |
//! | [`poi`]     | PoI ingest and AoI filtering                                  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                         |
//! |------------|------------------------------------------------------------------|
//! | `parallel` | Parallelizes AoI masking and PoI-in-AoI filtering with `rayon`.  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Grid`'s cell arrays for     |
//! |            | cache (de)serialization.                                         |

pub mod aoi;
pub mod builder;
pub mod cell;
pub mod poi;

#[cfg(test)]
mod tests;

pub use aoi::Ring;
pub use builder::GridBuilder;
pub use cell::{EduType, Grid};
pub use poi::Poi;
