/*!
 * Stress Run
 * Header, stats, garbage, stats, elapsed time
 */

use crate::core::errors::StressResult;
use crate::memory::traits::MemoryProbe;
use crate::memory::types::MemorySnapshot;
use crate::report::ReportWriter;
use crate::workload::{GarbageGenerator, WorkloadConfig};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info, Level};

/// What one run observed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub before: MemorySnapshot,
    pub after: MemorySnapshot,
    pub retained: usize,
    pub elapsed: Duration,
}

/// One complete stress run against a memory probe
pub struct StressRun<P: MemoryProbe> {
    probe: P,
    generator: GarbageGenerator,
}

impl<P: MemoryProbe> StressRun<P> {
    pub fn new(probe: P, config: WorkloadConfig) -> Self {
        Self {
            probe,
            generator: GarbageGenerator::new(config),
        }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn run<W: Write>(&self, out: W) -> StressResult<RunSummary> {
        let timer = Instant::now();
        let mut report = ReportWriter::new(out);

        info!(config = ?self.generator.config(), "Stress run starting");
        report.environment(&self.probe.environment()?)?;

        let before = self.capture("before")?;
        report.snapshot(&before)?;

        report.generation_started()?;
        let kept = self.generator.generate()?;
        report.kept(kept.len())?;

        // Retained sequences must stay reachable through the second snapshot.
        let after = self.capture("after")?;
        report.snapshot(&after)?;
        let retained = kept.len();
        drop(kept);

        let elapsed = timer.elapsed();
        report.completed(elapsed)?;
        info!(retained, elapsed_ms = elapsed.as_millis() as u64, "Stress run complete");

        Ok(RunSummary {
            before,
            after,
            retained,
            elapsed,
        })
    }

    fn capture(&self, phase: &'static str) -> StressResult<MemorySnapshot> {
        let snapshot = self.probe.capture()?;

        if tracing::enabled!(Level::DEBUG) {
            let encoded = serde_json::to_string(&snapshot)?;
            debug!(phase, snapshot = %encoded, "Memory snapshot captured");
        }

        Ok(snapshot)
    }
}
