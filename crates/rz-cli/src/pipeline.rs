//! Wires the job descriptor to the full classification/positioning pipeline
//! (§2, §4) and writes every configured output (§6).

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use serde::Deserialize;

use rz_core::JobDescriptor;
use rz_grid::{poi::ingest_pois, Grid, GridBuilder};
use rz_io::sources::{AccessPointSource, FileAccessPointSource};
use rz_io::{aoi, cache, job, osm, output};
use rz_placement::{build_report, place_edus};
use rz_raster::{rasterize_rivers, rasterize_roads};
use rz_risk::{normalize_and_quantize, score_connectivity, score_elevation_risk, score_poi_risk, score_urban_probability, ConnWeights, TypeParams};

use crate::cli::Cli;
use crate::error::CoreError;

/// Uniform weighting of the four connectivity parameters; the job
/// descriptor has no field for per-deployment weight tuning, so the CLI
/// treats every type's `s`/`t`/`r`/`c` components as equally significant.
const DEFAULT_CONN_WEIGHTS: ConnWeights = ConnWeights { w_s: 1.0, w_t: 1.0, w_r: 1.0, w_c: 1.0 };

#[derive(Deserialize)]
struct RawTypeParams {
    s: f64,
    t: f64,
    r: f64,
    c: f64,
}

fn load_type_params(path: &Path) -> Result<HashMap<String, TypeParams>, CoreError> {
    let text = std::fs::read_to_string(path).map_err(rz_io::IoError::from)?;
    let raw: HashMap<String, RawTypeParams> =
        serde_json::from_str(&text).map_err(rz_io::IoError::from)?;
    Ok(raw
        .into_iter()
        .map(|(k, p)| (k, TypeParams { s: p.s, t: p.t, r: p.r, c: p.c }))
        .collect())
}

/// `lat,lon,elevation` rows in row-major cell order; row count must match
/// the grid's cell count exactly.
fn load_elevation_csv(path: &Path, expected_len: usize) -> Result<Vec<f64>, CoreError> {
    let mut reader = csv::Reader::from_path(path).map_err(rz_io::IoError::from)?;
    let mut elevations = Vec::with_capacity(expected_len);
    for record in reader.records() {
        let record = record.map_err(rz_io::IoError::from)?;
        let elevation: f64 = record
            .get(2)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| rz_io::IoError::Osm("elevation row missing numeric column 3".into()))?;
        elevations.push(elevation);
    }
    if elevations.len() != expected_len {
        return Err(rz_io::IoError::Osm(format!(
            "elevation file has {} rows, grid has {} cells",
            elevations.len(),
            expected_len
        ))
        .into());
    }
    Ok(elevations)
}

fn build_or_load_grid(job: &JobDescriptor) -> Result<Grid, CoreError> {
    let mut grid = GridBuilder::from_bbox(job.bbox, job.zone_size, job.m).build();
    if grid.cell_count() == 0 {
        return Err(rz_core::RzError::Config("bbox/zone_size produce an empty grid".into()).into());
    }

    let cached = job.cache_zones
        && job
            .cache_path
            .as_deref()
            .map(|p| Path::new(p).is_file())
            .unwrap_or(false);

    if cached {
        let path = Path::new(job.cache_path.as_deref().unwrap());
        cache::load_cache(path, &mut grid)?;
        log::info!("loaded cached cell array from {}", path.display());
        return Ok(grid);
    }

    if let Some(geojson_path) = &job.geojson_path {
        let rings = aoi::parse_aoi(Path::new(geojson_path))?;
        rz_grid::aoi::mask_grid(&mut grid, rings);
    } else {
        grid.rebuild_zones_inside();
    }

    if grid.zones_inside.is_empty() {
        return Err(rz_core::RzError::EmptyAoi.into());
    }

    if let Some(pois_path) = &job.pois_path {
        let data = osm::parse_osm(Path::new(pois_path), &job.pois_types)?;
        ingest_pois(&mut grid, data.pois);
        rasterize_roads(&mut grid, &data.roads)?;
        rasterize_rivers(&mut grid, &data.rivers)?;
    } else {
        log::warn!("no PoIs/OSM input configured; risk stays uniform");
    }

    score_poi_risk(&mut grid);
    score_urban_probability(&mut grid);

    if job.cache_zones {
        if let Some(path) = &job.cache_path {
            cache::save_cache(Path::new(path), &grid)?;
        }
    }

    Ok(grid)
}

fn apply_optional_layers(cli: &Cli, grid: &mut Grid, job: &JobDescriptor) -> Result<(), CoreError> {
    if let Some(elevation_path) = &cli.elevation {
        let elevations = load_elevation_csv(elevation_path, grid.cell_count())?;
        score_elevation_risk(grid, &elevations);
    }

    if let (Some(ap_path), Some(params_path)) = (&cli.access_points, &cli.connectivity_params) {
        let source = FileAccessPointSource::load(ap_path)?;
        let access_points = source.access_points(&job.bbox)?;
        let params = load_type_params(params_path)?;
        score_connectivity(grid, &access_points, &params, DEFAULT_CONN_WEIGHTS);
    }

    Ok(())
}

fn write_outputs(job: &JobDescriptor, grid: &Grid, report: &rz_placement::Report) -> Result<(), CoreError> {
    if let Some(p) = &job.output {
        output::write_map(Path::new(p), grid)?;
    }
    if let Some(p) = &job.output_edus {
        output::write_edus(Path::new(p), grid)?;
    }
    if let Some(p) = &job.output_roads {
        output::write_roads(Path::new(p), grid)?;
    }
    if let Some(p) = &job.output_rivers {
        output::write_rivers(Path::new(p), grid)?;
    }
    if let Some(p) = &job.output_elevation {
        output::write_elevation(Path::new(p), grid)?;
    }
    if let Some(p) = &job.output_slope {
        output::write_slope(Path::new(p), grid)?;
    }
    if let Some(p) = &job.output_connectivity {
        output::write_connectivity(Path::new(p), grid)?;
    }
    if let Some(p) = &job.res_data {
        output::write_res_data(Path::new(p), report)?;
    }
    Ok(())
}

/// Run one classification + positioning job end to end.
pub fn run(cli: &Cli) -> Result<(), CoreError> {
    let job = job::load_job_descriptor(&cli.job)?;

    let classification_start = Instant::now();
    let mut grid = build_or_load_grid(&job)?;
    apply_optional_layers(cli, &mut grid, &job)?;
    normalize_and_quantize(&mut grid);
    let classification_elapsed = classification_start.elapsed();

    let positioning_start = Instant::now();
    place_edus(&mut grid, job.edu_alg, job.edus, job.connectivity_threshold, job.seed)?;
    let positioning_elapsed = positioning_start.elapsed();

    let report = build_report(&grid, classification_elapsed, positioning_elapsed);
    write_outputs(&job, &grid, &report)?;

    log::info!(
        "job finished: {} cells, {} inside AoI, {} EDUs placed",
        grid.cell_count(),
        grid.zones_inside.len(),
        grid.edus.iter().map(|v| v.len()).sum::<usize>()
    );
    Ok(())
}
