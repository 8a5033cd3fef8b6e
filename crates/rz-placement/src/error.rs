//! Error type for EDU placement (§4.9).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("grid has no cells (grid_x or grid_y is zero)")]
    EmptyGrid,

    #[error("AoI is empty: no cell is marked inside")]
    EmptyAoi,
}

pub type PlacementResult<T> = Result<T, PlacementError>;
