//! `CoreError`: the top-level error type composing every sub-crate's error
//! enum, with the single exit-code mapping the binary uses (§6, §7). No
//! other crate in this workspace calls `std::process::exit` or panics on a
//! recoverable condition.

use thiserror::Error;

use rz_core::ExitCode;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Core(#[from] rz_core::RzError),

    #[error(transparent)]
    Io(#[from] rz_io::IoError),

    #[error(transparent)]
    Raster(#[from] rz_raster::RasterError),

    #[error(transparent)]
    Risk(#[from] rz_risk::RiskError),

    #[error(transparent)]
    Placement(#[from] rz_placement::PlacementError),
}

impl CoreError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CoreError::Core(e) => e.exit_code(),
            CoreError::Io(rz_io::IoError::CacheCorrupted(_)) => ExitCode::CacheCorrupted,
            CoreError::Io(_) => ExitCode::MissingConfig,
            CoreError::Raster(_) => ExitCode::NoZones,
            CoreError::Risk(_) => ExitCode::NoZones,
            CoreError::Placement(_) => ExitCode::NoZones,
        }
    }
}
