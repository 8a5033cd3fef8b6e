//! Argument schema for the `riskzones` binary.

use std::path::PathBuf;

/// Classify a bounding box into risk levels and position EDUs, driven by a
/// JSON job descriptor (§6).
#[derive(clap::Parser, Debug)]
#[command(name = "riskzones", version, about, propagate_version = true)]
pub struct Cli {
    /// Path to the job descriptor JSON file.
    pub job: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Optional JSON file of access points (`[{lat,lon,range,type}, ...]`);
    /// without it the connectivity layer is skipped (§4.7 is optional).
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub access_points: Option<PathBuf>,

    /// Optional JSON file mapping access-point type to its `{s,t,r,c}`
    /// connectivity parameters; required alongside `--access-points` to run
    /// the connectivity layer.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub connectivity_params: Option<PathBuf>,

    /// Optional CSV file of `lat,lon,elevation` samples, one per grid cell,
    /// in row-major order; without it the elevation layer is skipped
    /// (§4.5 is optional).
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub elevation: Option<PathBuf>,
}
