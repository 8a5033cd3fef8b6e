//! Risk-subsystem error type.

use thiserror::Error;

/// Errors produced by `rz-risk`.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("grid has no AoI-inside cells to classify")]
    NoZones,
}

pub type RiskResult<T> = Result<T, RiskError>;
