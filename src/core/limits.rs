/*!
 * Workload Limits and Constants
 *
 * Fixed sizes of the garbage workload and unit constants for reporting.
 */

// =============================================================================
// WORKLOAD
// =============================================================================

/// Number of independent parallel work units
pub const TASK_COUNT: usize = 100;

/// Iterations each work unit performs, strictly in sequence
pub const ITERATIONS_PER_TASK: usize = 100;

/// Integers generated, serialized and parsed per iteration
pub const SEQUENCE_LENGTH: usize = 100_000;

/// Chance that a parsed sequence is kept alive instead of dropped
pub const RETENTION_PROBABILITY: f64 = 0.01;

/// Separator used when joining a sequence into text
pub const DELIMITER: &str = ";";

// =============================================================================
// REPORTING
// =============================================================================

/// Binary megabyte
pub const MEBIBYTE: u64 = 1024 * 1024;

/// Share of available memory at which load is considered high
/// Matches the default high-memory-load percentage of managed runtimes
pub const HIGH_MEMORY_LOAD_PERCENT: u64 = 90;

/// cgroup v2 reports this when no memory limit is set
pub const CGROUP_UNLIMITED: &str = "max";
