//! Job descriptor parsing (§6): reads the external JSON job configuration
//! and produces the validated [`JobDescriptor`][rz_core::JobDescriptor].
//! `rz-core` owns the descriptor's shape and validation rules; this module
//! owns turning raw, possibly-missing JSON fields into that shape.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use rz_core::config::{EduAlg, EduCounts, JobDescriptor, PoiTypeTable};
use rz_core::geo::BBox;
use rz_core::error::{RzError, RzResult};

#[derive(Deserialize)]
struct RawEduCounts {
    #[serde(default)]
    loose: u32,
    #[serde(default)]
    tight: u32,
}

#[derive(Deserialize)]
struct RawJobDescriptor {
    left: Option<f64>,
    bottom: Option<f64>,
    right: Option<f64>,
    top: Option<f64>,
    zone_size: Option<f64>,
    #[serde(rename = "M")]
    m: Option<u32>,
    #[serde(default)]
    edus: RawEduCounts,
    pois: Option<String>,
    #[serde(default)]
    pois_types: PoiTypeTable,
    geojson: Option<String>,
    #[serde(default = "default_edu_alg")]
    edu_alg: String,
    #[serde(default)]
    connectivity_threshold: f64,
    #[serde(default)]
    cache_zones: bool,
    cache_path: Option<String>,
    #[serde(default)]
    seed: u64,
    output: Option<String>,
    output_edus: Option<String>,
    output_roads: Option<String>,
    output_rivers: Option<String>,
    output_elevation: Option<String>,
    output_slope: Option<String>,
    output_connectivity: Option<String>,
    res_data: Option<String>,
}

fn default_edu_alg() -> String {
    "balanced".to_string()
}

/// Parse and validate a job descriptor from a JSON file (§4.11, §6).
///
/// Missing `left`/`bottom`/`right`/`top`/`zone_size`/`M` and an unrecognized
/// `edu_alg` are reported as [`RzError::Config`]; malformed JSON is reported
/// as [`RzError::Parse`].
pub fn load_job_descriptor(path: &Path) -> RzResult<JobDescriptor> {
    let text = fs::read_to_string(path)?;
    let raw: RawJobDescriptor =
        serde_json::from_str(&text).map_err(|e| RzError::Parse(e.to_string()))?;

    let bbox = BBox {
        left: raw.left.ok_or_else(|| RzError::Config("missing 'left'".into()))?,
        bottom: raw.bottom.ok_or_else(|| RzError::Config("missing 'bottom'".into()))?,
        right: raw.right.ok_or_else(|| RzError::Config("missing 'right'".into()))?,
        top: raw.top.ok_or_else(|| RzError::Config("missing 'top'".into()))?,
    };
    let zone_size = raw.zone_size.ok_or_else(|| RzError::Config("missing 'zone_size'".into()))?;
    let m = raw.m.ok_or_else(|| RzError::Config("missing 'M'".into()))?;
    let edu_alg = EduAlg::parse(&raw.edu_alg)?;

    let job = JobDescriptor {
        bbox,
        zone_size,
        m,
        edus: EduCounts { loose: raw.edus.loose, tight: raw.edus.tight },
        pois_path: raw.pois,
        pois_types: raw.pois_types,
        geojson_path: raw.geojson,
        edu_alg,
        connectivity_threshold: raw.connectivity_threshold,
        cache_zones: raw.cache_zones,
        cache_path: raw.cache_path,
        seed: raw.seed,
        output: raw.output,
        output_edus: raw.output_edus,
        output_roads: raw.output_roads,
        output_rivers: raw.output_rivers,
        output_elevation: raw.output_elevation,
        output_slope: raw.output_slope,
        output_connectivity: raw.output_connectivity,
        res_data: raw.res_data,
    };
    job.validate()?;
    Ok(job)
}
