/*!
 * Heap Stress Library
 * Allocator stress workload and memory statistics reporting
 */

pub mod app;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod report;
pub mod workload;

// Re-exports
pub use crate::app::{RunSummary, StressRun};
pub use crate::core::errors::{StressError, StressResult};
pub use crate::memory::{MemoryProbe, MemorySnapshot, SystemProbe};
pub use crate::monitoring::init_tracing;
pub use crate::workload::{GarbageGenerator, WorkloadConfig};
