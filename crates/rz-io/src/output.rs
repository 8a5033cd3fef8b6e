//! Output writers (§6, §4.10): one CSV per layer (`map`, `edus`, `roads`,
//! `rivers`, `elevation`, `slope`, `connectivity`), each with a header row
//! and one line per AoI-inside cell (or per EDU), plus the `res_data`
//! summary JSON. All numbers are decimal ASCII, written through the `csv`
//! crate; `res_data` is written through `serde_json`.

use std::fs;
use std::path::Path;

use csv::Writer;

use rz_grid::Grid;
use rz_placement::Report;

use crate::error::IoResult;

/// `map.csv`: every AoI-inside cell's id, position, RL and risk.
pub fn write_map(path: &Path, grid: &Grid) -> IoResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["id", "lat", "lon", "rl", "risk", "is_road", "is_river", "urban_prob"])?;
    for &id in &grid.zones_inside {
        let idx = id.index();
        w.write_record([
            id.0.to_string(),
            grid.lat[idx].to_string(),
            grid.lon[idx].to_string(),
            grid.rl[idx].to_string(),
            grid.risk[idx].to_string(),
            (grid.is_road[idx] as u8).to_string(),
            (grid.is_river[idx] as u8).to_string(),
            grid.urban_prob[idx].to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// `edus.csv`: one line per placed EDU, across every RL.
pub fn write_edus(path: &Path, grid: &Grid) -> IoResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["id", "lat", "lon", "rl", "edu_type"])?;
    for (rl, list) in grid.edus.iter().enumerate().skip(1) {
        for &id in list {
            let idx = id.index();
            w.write_record([
                id.0.to_string(),
                grid.lat[idx].to_string(),
                grid.lon[idx].to_string(),
                rl.to_string(),
                format!("{:?}", grid.edu_type[idx]),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// `roads.csv`: AoI-inside cells with `is_road = true`.
pub fn write_roads(path: &Path, grid: &Grid) -> IoResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["id", "lat", "lon"])?;
    for &id in &grid.zones_inside {
        let idx = id.index();
        if grid.is_road[idx] {
            w.write_record([id.0.to_string(), grid.lat[idx].to_string(), grid.lon[idx].to_string()])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// `rivers.csv`: AoI-inside cells with `is_river = true`.
pub fn write_rivers(path: &Path, grid: &Grid) -> IoResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["id", "lat", "lon"])?;
    for &id in &grid.zones_inside {
        let idx = id.index();
        if grid.is_river[idx] {
            w.write_record([id.0.to_string(), grid.lat[idx].to_string(), grid.lon[idx].to_string()])?;
        }
    }
    w.flush()?;
    Ok(())
}

/// `elevation.csv`: per-cell elevation for every AoI-inside cell.
pub fn write_elevation(path: &Path, grid: &Grid) -> IoResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["id", "lat", "lon", "elevation"])?;
    for &id in &grid.zones_inside {
        let idx = id.index();
        w.write_record([
            id.0.to_string(),
            grid.lat[idx].to_string(),
            grid.lon[idx].to_string(),
            grid.elevation[idx].to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// `slope.csv`: per-cell slope for every AoI-inside cell.
pub fn write_slope(path: &Path, grid: &Grid) -> IoResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["id", "lat", "lon", "slope"])?;
    for &id in &grid.zones_inside {
        let idx = id.index();
        w.write_record([
            id.0.to_string(),
            grid.lat[idx].to_string(),
            grid.lon[idx].to_string(),
            grid.slope[idx].to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// `connectivity.csv`: per-cell `dpconn` for every AoI-inside cell.
pub fn write_connectivity(path: &Path, grid: &Grid) -> IoResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["id", "lat", "lon", "dpconn"])?;
    for &id in &grid.zones_inside {
        let idx = id.index();
        w.write_record([
            id.0.to_string(),
            grid.lat[idx].to_string(),
            grid.lon[idx].to_string(),
            grid.dpconn[idx].to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// `res_data`: the classification/positioning report, mirroring §4.10.
pub fn write_res_data(path: &Path, report: &Report) -> IoResult<()> {
    let text = serde_json::to_string_pretty(report)?;
    fs::write(path, text)?;
    Ok(())
}
