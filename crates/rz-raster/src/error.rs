//! Raster-subsystem error type.

use thiserror::Error;

/// Errors produced by `rz-raster`.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("grid has no cells to rasterize onto (grid_x or grid_y is 0)")]
    EmptyGrid,
}

pub type RasterResult<T> = Result<T, RasterError>;
