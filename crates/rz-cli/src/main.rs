//! `riskzones` — command-line driver for the geospatial risk-classification
//! and EDU-positioning engine (§2, §6).
//!
//! Parses a job descriptor, runs the grid/risk/placement pipeline, writes
//! every configured output, and maps the outcome to the job contract's exit
//! codes (§6/§7). This binary owns the only `std::process::exit` call in
//! the workspace.

mod cli;
mod error;
mod pipeline;

use clap::Parser;

use cli::Cli;
use rz_core::ExitCode;

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let exit_code = match pipeline::run(&cli) {
        Ok(()) => ExitCode::Ok,
        Err(e) => {
            log::error!("job failed: {e}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code.code());
}
