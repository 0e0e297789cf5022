/*!
 * Workload Configuration
 */

use crate::core::limits::{
    ITERATIONS_PER_TASK, RETENTION_PROBABILITY, SEQUENCE_LENGTH, TASK_COUNT,
};
use serde::{Deserialize, Serialize};

/// Shape of one garbage run
///
/// The binary always runs with `Default`; other shapes exist for tests and
/// benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WorkloadConfig {
    pub tasks: usize,
    pub iterations: usize,
    pub sequence_length: usize,
    pub retention_probability: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            tasks: TASK_COUNT,
            iterations: ITERATIONS_PER_TASK,
            sequence_length: SEQUENCE_LENGTH,
            retention_probability: RETENTION_PROBABILITY,
        }
    }
}

impl WorkloadConfig {
    /// Total iterations across every task
    pub fn total_iterations(&self) -> usize {
        self.tasks * self.iterations
    }

    /// Expected size of the retained set
    pub fn expected_retained(&self) -> f64 {
        self.total_iterations() as f64 * self.retention_probability
    }
}
