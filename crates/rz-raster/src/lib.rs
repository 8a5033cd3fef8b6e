//! `rz-raster` — road and river polyline rasterization onto the cell grid.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|--------------------------------------------------------------|
//! | [`segment`]  | `RoadSegment`, `RiverSegment` — plain lon/lat endpoint pairs |
//! | [`walk`]     | The distance-guarded incremental line walk (§4.3)           |
//! | [`error`]    | `RasterError`, `RasterResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                          |
//! |------------|--------------------------------------------------------------------|
//! | `parallel` | Rasterizes segments concurrently with `rayon`, merging per-cell    |
//! |            | `is_road`/`is_river` flags with a logical OR.                      |

pub mod error;
pub mod segment;
pub mod walk;

#[cfg(test)]
mod tests;

pub use error::{RasterError, RasterResult};
pub use segment::{RiverSegment, RoadSegment};
pub use walk::{rasterize_rivers, rasterize_roads};
