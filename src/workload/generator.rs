/*!
 * Garbage Generator
 * Data-parallel fan-out of work units over the rayon global pool
 */

use super::batch::GarbageTask;
use super::retention::RetainedSet;
use super::WorkloadConfig;
use crate::core::errors::StressResult;
use crate::core::types::{Sequence, TaskIndex};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Runs every work unit to completion and hands back what was retained
#[derive(Debug, Clone, Default)]
pub struct GarbageGenerator {
    config: WorkloadConfig,
}

impl GarbageGenerator {
    pub fn new(config: WorkloadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Blocks until all work units finish; there is no partial result
    pub fn generate(&self) -> StressResult<Vec<Sequence>> {
        let start = Instant::now();
        let retained = RetainedSet::new();

        info!(
            tasks = self.config.tasks,
            iterations = self.config.iterations,
            sequence_length = self.config.sequence_length,
            threads = rayon::current_num_threads(),
            "Generating garbage"
        );

        (0..self.config.tasks)
            .into_par_iter()
            .try_for_each(|index| self.run_task(index, &retained))?;

        let kept = retained.into_vec();
        info!(
            retained = kept.len(),
            expected = self.config.expected_retained(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Garbage generation complete"
        );

        Ok(kept)
    }

    /// Iterations of one work unit, strictly in sequence
    #[instrument(level = "debug", skip(self, retained))]
    pub fn run_task(&self, index: TaskIndex, retained: &RetainedSet) -> StressResult<()> {
        let mut task = GarbageTask::new(index, &self.config);
        let mut kept = 0usize;

        for _ in 0..self.config.iterations {
            let iteration = task.next_iteration()?;
            if iteration.retain {
                retained.insert(iteration.parsed);
                kept += 1;
            }
        }

        debug!(task = task.index(), kept, "Task finished");
        Ok(())
    }
}
