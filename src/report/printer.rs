/*!
 * Report Printer
 * Human-readable output blocks written to any `io::Write`
 */

use super::format::{format_mebibytes, format_seconds, group_thousands};
use crate::core::errors::StressResult;
use crate::core::types::Bytes;
use crate::memory::types::{MemorySnapshot, RuntimeEnvironment};
use std::io::Write;
use std::time::Duration;

type Counter = fn(&MemorySnapshot) -> Bytes;

/// Labels and sources of every statistics line, in print order
const STATISTICS: [(&str, Counter); 15] = [
    ("GC GetTotalMemory", |s| s.allocator.allocated_bytes),
    ("GC Info HeapSizeBytes", |s| s.allocator.heap_size_bytes),
    ("GC Info TotalCommittedBytes", |s| s.allocator.committed_bytes),
    ("GC Info TotalAvailableMemoryBytes", |s| s.system.total_available_bytes),
    ("GC Info FragmentedBytes", |s| s.allocator.fragmented_bytes()),
    ("GC Info MemoryLoadBytes", |s| s.system.memory_load_bytes),
    ("GC Info HighMemoryLoadThresholdBytes", |s| {
        s.system.high_memory_load_threshold_bytes()
    }),
    ("Process PagedMemorySize", |s| s.process.paged_bytes),
    ("Process PagedSystemMemorySize", |s| s.process.paged_system_bytes),
    ("Process PrivateMemorySize", |s| s.process.private_bytes),
    ("Process VirtualMemorySize", |s| s.process.virtual_bytes),
    ("Process WorkingSet", |s| s.process.working_set_bytes),
    ("Process PeakPagedMemorySize", |s| s.process.peak_paged_bytes),
    ("Process PeakWorkingSet", |s| s.process.peak_working_set_bytes),
    ("Task Manager Working Set", |s| s.process.private_working_set_bytes),
];

/// Writes the report sections in the fixed output layout
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn environment(&mut self, environment: &RuntimeEnvironment) -> StressResult<()> {
        writeln!(self.out, "CPU Target: {}", environment.cpu_target)?;
        writeln!(self.out, "GC Mode: {}", environment.collector_mode)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn snapshot(&mut self, snapshot: &MemorySnapshot) -> StressResult<()> {
        writeln!(self.out, "Memory statistics:")?;
        for (label, counter) in STATISTICS {
            writeln!(
                self.out,
                "- {}: {} MiB",
                label,
                format_mebibytes(counter(snapshot))
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn generation_started(&mut self) -> StressResult<()> {
        writeln!(self.out, "Generating garbage:")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn kept(&mut self, count: usize) -> StressResult<()> {
        writeln!(
            self.out,
            "- Kept {} objects alive",
            group_thousands(count as u64)
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn completed(&mut self, elapsed: Duration) -> StressResult<()> {
        writeln!(self.out, "Completed in {} seconds", format_seconds(elapsed))?;
        self.out.flush()?;
        Ok(())
    }
}
