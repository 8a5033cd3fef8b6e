//! Cache (de)serialization (§4.13): a JSON dump of the cell array after RL
//! quantization. When present and enabled, loading it replaces grid
//! construction through RL quantization (pipeline steps 2-6).

use std::fs;
use std::path::Path;

use rz_grid::cell::CellRecord;
use rz_grid::Grid;

use crate::error::{IoError, IoResult};

/// Write the grid's cell array to `path` as a JSON array of [`CellRecord`]s.
pub fn save_cache(path: &Path, grid: &Grid) -> IoResult<()> {
    let records = grid.to_records();
    let text = serde_json::to_string(&records)?;
    fs::write(path, text)?;
    log::info!("wrote cache with {} cells to {}", records.len(), path.display());
    Ok(())
}

/// Load a cache file into an already-constructed `grid`, overwriting every
/// per-cell array. `grid` must have the same dimensions the cache was
/// written with — a mismatch in cell count is reported as corruption rather
/// than silently truncated or padded.
pub fn load_cache(path: &Path, grid: &mut Grid) -> IoResult<()> {
    let text = fs::read_to_string(path)?;
    let records: Vec<CellRecord> = serde_json::from_str(&text)
        .map_err(|e| IoError::CacheCorrupted(e.to_string()))?;

    if records.len() != grid.cell_count() {
        return Err(IoError::CacheCorrupted(format!(
            "cache has {} cells, grid expects {}",
            records.len(),
            grid.cell_count()
        )));
    }

    grid.load_records(records);
    log::info!("loaded cache with {} cells from {}", grid.cell_count(), path.display());
    Ok(())
}
