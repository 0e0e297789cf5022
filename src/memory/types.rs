/*!
 * Memory Types
 * Point-in-time counters captured by the statistics reporter
 */

use crate::core::limits::HIGH_MEMORY_LOAD_PERCENT;
use crate::core::types::Bytes;
use serde::{Deserialize, Serialize};

/// Allocator counters, the heap half of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AllocatorState {
    /// Bytes currently allocated by the application
    pub allocated_bytes: Bytes,
    /// Bytes in active pages, including unused space inside them
    pub heap_size_bytes: Bytes,
    /// Bytes of allocator pages physically resident in memory
    pub committed_bytes: Bytes,
}

impl AllocatorState {
    /// Bytes the allocator holds in active pages but the application cannot use
    pub fn fragmented_bytes(&self) -> Bytes {
        self.heap_size_bytes.saturating_sub(self.allocated_bytes)
    }
}

/// Host memory counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SystemMemory {
    /// Physical memory, capped by the container limit when one is set
    pub total_available_bytes: Bytes,
    /// Memory currently in use across the host
    pub memory_load_bytes: Bytes,
}

impl SystemMemory {
    /// Load above which the host is considered under memory pressure
    pub fn high_memory_load_threshold_bytes(&self) -> Bytes {
        self.total_available_bytes / 100 * HIGH_MEMORY_LOAD_PERCENT
    }
}

/// OS-level counters for the current process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessMemory {
    pub paged_bytes: Bytes,
    pub paged_system_bytes: Bytes,
    pub private_bytes: Bytes,
    pub virtual_bytes: Bytes,
    pub working_set_bytes: Bytes,
    pub peak_paged_bytes: Bytes,
    pub peak_working_set_bytes: Bytes,
    /// Private working set as a task manager would show it
    pub private_working_set_bytes: Bytes,
}

/// Immutable snapshot of allocator, host and process counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MemorySnapshot {
    pub allocator: AllocatorState,
    pub system: SystemMemory,
    pub process: ProcessMemory,
}

/// Pointer width of the running binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuTarget {
    X86,
    X64,
}

impl CpuTarget {
    pub fn current() -> Self {
        if cfg!(target_pointer_width = "64") {
            CpuTarget::X64
        } else {
            CpuTarget::X86
        }
    }
}

impl std::fmt::Display for CpuTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CpuTarget::X86 => write!(f, "x86"),
            CpuTarget::X64 => write!(f, "x64"),
        }
    }
}

/// How the allocator returns memory to the OS
///
/// `Server` means purging runs concurrently on background threads,
/// `Workstation` means it happens inline on allocating threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectorMode {
    Workstation,
    Server,
}

impl std::fmt::Display for CollectorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CollectorMode::Workstation => write!(f, "Workstation"),
            CollectorMode::Server => write!(f, "Server"),
        }
    }
}

/// Read-only facts about the runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeEnvironment {
    pub cpu_target: CpuTarget,
    pub collector_mode: CollectorMode,
}
