/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by every fallible operation in the crate
pub type StressResult<T> = Result<T, StressError>;

/// Unified error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum StressError {
    #[error("Failed to read allocator statistic `{stat}`: {message}")]
    #[diagnostic(
        code(allocator::stat_unavailable),
        help("Allocator statistics require jemalloc built with stats support.")
    )]
    AllocatorStat { stat: &'static str, message: String },

    #[error("Allocator control `{control}` failed with code {code}")]
    #[diagnostic(
        code(allocator::control_failed),
        help("The allocator rejected the control request. Check MALLOC_CONF.")
    )]
    AllocatorControl { control: &'static str, code: i32 },

    #[error("Failed to read {}: {source}", .path.display())]
    #[diagnostic(
        code(procfs::read_failed),
        help("The OS performance facility is unavailable. Check that /proc is mounted and readable.")
    )]
    Procfs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Field `{field}` missing from {}", .path.display())]
    #[diagnostic(
        code(procfs::missing_field),
        help("The kernel did not report this counter. Older kernels may lack it.")
    )]
    MissingField { field: &'static str, path: PathBuf },

    #[error("Field `{field}` in {} has invalid value `{value}`", .path.display())]
    #[diagnostic(code(procfs::invalid_field))]
    InvalidField {
        field: &'static str,
        value: String,
        path: PathBuf,
    },

    #[error("No process named `{0}` found")]
    #[diagnostic(
        code(procfs::process_not_found),
        help("The process image name could not be resolved through /proc/<pid>/comm.")
    )]
    ProcessNotFound(String),

    #[error("Not supported: {0}")]
    #[diagnostic(
        code(platform::not_supported),
        help("This statistic is not available on this platform or build configuration.")
    )]
    Unsupported(&'static str),

    #[error("Failed to parse `{piece}` back into an integer: {source}")]
    #[diagnostic(
        code(workload::parse_failed),
        help("Serialized pieces are produced from valid integers; this indicates corruption.")
    )]
    Parse {
        piece: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Output error: {0}")]
    #[diagnostic(code(report::output_failed))]
    Output(#[from] std::io::Error),

    #[error("Failed to encode snapshot: {0}")]
    #[diagnostic(code(report::encode_failed))]
    Encode(#[from] serde_json::Error),
}

impl StressError {
    pub fn procfs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StressError::Procfs {
            path: path.into(),
            source,
        }
    }
}
