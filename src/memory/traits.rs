/*!
 * Memory Traits
 * Platform seams for collection and counter capture
 */

use super::types::*;
use crate::core::errors::StressResult;

/// Allocator control and statistics
pub trait Collector: Send + Sync {
    /// Force a full blocking collection, returning unused pages to the OS
    fn collect(&self) -> StressResult<()>;

    /// Read allocator counters without collecting
    fn allocator_state(&self) -> StressResult<AllocatorState>;

    /// Report how the allocator reclaims memory
    fn mode(&self) -> StressResult<CollectorMode>;
}

/// OS memory counters
pub trait MemoryCounters: Send + Sync {
    /// Host-wide memory availability and load
    fn system_memory(&self) -> StressResult<SystemMemory>;

    /// Counters for the current process
    fn process_memory(&self) -> StressResult<ProcessMemory>;
}

/// Snapshot source combining both seams
pub trait MemoryProbe: Collector + MemoryCounters {
    /// Collect, then capture every counter
    fn capture(&self) -> StressResult<MemorySnapshot> {
        self.collect()?;

        Ok(MemorySnapshot {
            allocator: self.allocator_state()?,
            system: self.system_memory()?,
            process: self.process_memory()?,
        })
    }

    /// Read-only environment facts reported in the header
    fn environment(&self) -> StressResult<RuntimeEnvironment> {
        Ok(RuntimeEnvironment {
            cpu_target: CpuTarget::current(),
            collector_mode: self.mode()?,
        })
    }
}

/// Implement MemoryProbe for types that implement both seams
impl<T> MemoryProbe for T where T: Collector + MemoryCounters {}
