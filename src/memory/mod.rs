/*!
 * Memory Module
 * Allocator collection and memory counter capture
 */

pub mod allocator;
pub mod procfs;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use allocator::AllocatorCollector;
pub use procfs::ProcfsCounters;
pub use traits::*;
pub use types::*;

use crate::core::errors::StressResult;

/// Probe for the running process: global allocator plus host procfs
#[derive(Debug, Clone)]
pub struct SystemProbe {
    collector: AllocatorCollector,
    counters: ProcfsCounters,
}

impl SystemProbe {
    pub fn new() -> StressResult<Self> {
        Ok(Self {
            collector: AllocatorCollector::new(),
            counters: ProcfsCounters::host()?,
        })
    }
}

impl Collector for SystemProbe {
    fn collect(&self) -> StressResult<()> {
        self.collector.collect()
    }

    fn allocator_state(&self) -> StressResult<AllocatorState> {
        self.collector.allocator_state()
    }

    fn mode(&self) -> StressResult<CollectorMode> {
        self.collector.mode()
    }
}

impl MemoryCounters for SystemProbe {
    fn system_memory(&self) -> StressResult<SystemMemory> {
        self.counters.system_memory()
    }

    fn process_memory(&self) -> StressResult<ProcessMemory> {
        self.counters.process_memory()
    }
}
