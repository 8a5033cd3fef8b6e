//! Error type for the input/output collaborator layer (§6, §7).

use thiserror::Error;

/// Errors produced while reading job inputs or writing job outputs.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed OSM input: {0}")]
    Osm(String),

    #[error("malformed AoI GeoJSON: {0}")]
    Geojson(String),

    #[error("cache file is corrupted: {0}")]
    CacheCorrupted(String),

    #[cfg(feature = "http")]
    #[error("external service request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type IoResult<T> = Result<T, IoError>;
