//! Top-level error type and process exit codes.
//!
//! Sub-crates define their own error enums and convert them into `RzError`
//! via `From` impls; the CLI binary is the single place that maps an
//! `RzError` to a process exit code (§6/§7 of the job contract).

use thiserror::Error;

/// The top-level error type spanning the whole pipeline.
#[derive(Debug, Error)]
pub enum RzError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("AoI is empty: no cell was marked inside")]
    EmptyAoi,

    #[error("cache file is corrupted: {0}")]
    CacheCorrupted(String),

    #[error("external service '{service}' failed: {reason}")]
    ExternalService { service: String, reason: String },

    #[error("memory budget exceeded: {0}")]
    MemoryExhausted(String),

    #[error("subprocess timed out: {0}")]
    SubprocessTimeout(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

impl RzError {
    /// The process exit code this error maps to (§6).
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RzError::Config(_) => ExitCode::MissingConfig,
            RzError::EmptyAoi => ExitCode::NoZones,
            RzError::CacheCorrupted(_) => ExitCode::CacheCorrupted,
            RzError::MemoryExhausted(_) => ExitCode::Memory,
            RzError::SubprocessTimeout(_) => ExitCode::ExternalToolTimeout,
            // External-service failures on required inputs (PoI fetch) are
            // reported by the caller as Config/EmptyAoi/etc. once the
            // consequence is known; a bare service failure with no better
            // classification falls back to a generic config-style failure.
            RzError::ExternalService { .. } => ExitCode::MissingConfig,
            RzError::Io(_) | RzError::Parse(_) => ExitCode::MissingConfig,
        }
    }
}

/// Shorthand result type for all `rz-*` crates.
pub type RzResult<T> = Result<T, RzError>;

/// Process exit codes, matching the job contract exactly.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(i32)]
pub enum ExitCode {
    Ok = 0,
    Help = 1,
    CacheCorrupted = 2,
    NoZones = 3,
    NoPois = 4,
    Memory = 5,
    MissingConfig = 6,
    ExternalToolTimeout = 7,
}

impl ExitCode {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}
