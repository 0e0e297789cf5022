/*!
 * Core Types
 * Common types used across the crate
 */

/// Process ID type
pub type Pid = u32;

/// Byte count reported by allocator and OS counters
pub type Bytes = u64;

/// Index of one parallel work unit, also its RNG seed
pub type TaskIndex = usize;

/// One parsed integer sequence
pub type Sequence = Vec<i32>;
