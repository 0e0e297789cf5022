/*!
 * Workload Module
 * Parallel garbage generation with deliberate retention
 */

pub mod batch;
pub mod config;
pub mod generator;
pub mod retention;

// Re-export for convenience
pub use batch::{parse, random_sequence, serialize, GarbageTask, Iteration};
pub use config::WorkloadConfig;
pub use generator::GarbageGenerator;
pub use retention::RetainedSet;
