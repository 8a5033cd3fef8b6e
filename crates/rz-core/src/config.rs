//! The job descriptor: the validated, in-memory form of the external JSON
//! job configuration (§6). Parsing from raw JSON lives in `rz-io` (which
//! depends on this crate); this module owns the *shape* and the validation
//! rules so both `rz-io` and the CLI driver share one source of truth.

use std::collections::HashMap;

use crate::error::{RzError, RzResult};
use crate::geo::BBox;

/// One entry in the `pois_types` table: `key = value -> weight`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoiTypeTable(pub HashMap<String, HashMap<String, f64>>);

impl PoiTypeTable {
    /// Look up the weight configured for an OSM `k=v` tag pair, if any.
    pub fn weight_for(&self, key: &str, value: &str) -> Option<f64> {
        self.0.get(key)?.get(value).copied()
    }
}

/// Requested EDU counts, split by placement tightness.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EduCounts {
    pub loose: u32,
    pub tight: u32,
}

impl EduCounts {
    #[inline]
    pub fn total(&self) -> u32 {
        self.loose + self.tight
    }
}

/// Which EDU placement policy to run, keyed by the job descriptor's
/// historical `edu_alg` string values (§6 — the naming does not line up
/// cleanly with the §4.9 policy names, but the string contract is external
/// and is preserved as given).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EduAlg {
    /// `"random"` — random selection of cells per RL proportional to `n_edu_i`.
    Random,
    /// `"balanced"` — the Unbalanced policy.
    Unbalanced,
    /// `"enhanced"` — the Balanced policy.
    Balanced,
    /// `"restricted"` — the Restricted policy.
    Restricted,
    /// `"restricted_plus"` — the Restricted+ policy.
    RestrictedPlus,
}

impl EduAlg {
    pub fn parse(s: &str) -> RzResult<Self> {
        match s {
            "random" => Ok(EduAlg::Random),
            "balanced" => Ok(EduAlg::Unbalanced),
            "enhanced" => Ok(EduAlg::Balanced),
            "restricted" => Ok(EduAlg::Restricted),
            "restricted_plus" => Ok(EduAlg::RestrictedPlus),
            other => Err(RzError::Config(format!("unknown edu_alg '{other}'"))),
        }
    }
}

/// The validated job descriptor driving one classification run.
#[derive(Clone, Debug)]
pub struct JobDescriptor {
    pub bbox: BBox,
    pub zone_size: f64,
    pub m: u32,
    pub edus: EduCounts,
    pub pois_path: Option<String>,
    pub pois_types: PoiTypeTable,
    pub geojson_path: Option<String>,
    pub edu_alg: EduAlg,
    pub connectivity_threshold: f64,
    pub cache_zones: bool,
    pub cache_path: Option<String>,
    pub seed: u64,
    pub output: Option<String>,
    pub output_edus: Option<String>,
    pub output_roads: Option<String>,
    pub output_rivers: Option<String>,
    pub output_elevation: Option<String>,
    pub output_slope: Option<String>,
    pub output_connectivity: Option<String>,
    pub res_data: Option<String>,
}

impl JobDescriptor {
    /// Validate the invariants §4.11 requires before any grid work begins.
    pub fn validate(&self) -> RzResult<()> {
        if self.m < 1 {
            return Err(RzError::Config("M must be >= 1".into()));
        }
        if self.zone_size <= 0.0 {
            return Err(RzError::Config("zone_size must be > 0".into()));
        }
        if self.bbox.right <= self.bbox.left || self.bbox.top <= self.bbox.bottom {
            return Err(RzError::Config(
                "bbox must have right > left and top > bottom".into(),
            ));
        }
        Ok(())
    }
}
