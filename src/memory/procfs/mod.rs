/*!
 * Procfs Counters
 *
 * OS memory counters read from /proc and /sys. Every reader takes its root
 * directory so it can run against fixture trees.
 *
 * Mapping onto process counters:
 * - paged, paged system: `VmSwap`
 * - private: `VmData`
 * - virtual: `VmSize`
 * - working set: `VmRSS`
 * - peak paged: `VmPeak`
 * - peak working set: `VmHWM`
 * - private working set: `Private_Clean + Private_Dirty` of smaps_rollup
 */

mod meminfo;
mod smaps;
mod status;

pub use meminfo::read_system_memory;
pub use smaps::{find_process_by_name, read_private_working_set};
pub use status::{read_status, ProcessStatus};

use crate::core::errors::{StressError, StressResult};
use crate::core::types::{Bytes, Pid};
use crate::memory::traits::MemoryCounters;
use crate::memory::types::{ProcessMemory, SystemMemory};
use std::path::{Path, PathBuf};

pub(crate) fn read_file(path: &Path) -> StressResult<String> {
    std::fs::read_to_string(path).map_err(|err| StressError::procfs(path, err))
}

/// Parse a `<n> kB` counter into bytes
pub(crate) fn parse_kb(field: &'static str, value: &str, path: &Path) -> StressResult<Bytes> {
    let number = value.trim().trim_end_matches("kB").trim_end();

    number
        .parse::<Bytes>()
        .map(|kb| kb * 1024)
        .map_err(|_err| StressError::InvalidField {
            field,
            value: value.trim().to_string(),
            path: PathBuf::from(path),
        })
}

/// OS counters for one process, read through procfs
#[derive(Debug, Clone)]
pub struct ProcfsCounters {
    proc_root: PathBuf,
    sys_root: PathBuf,
    pid: Pid,
    image_name: String,
}

impl ProcfsCounters {
    /// Counters for the current process on the running host
    #[cfg(target_os = "linux")]
    pub fn host() -> StressResult<Self> {
        let proc_root = PathBuf::from("/proc");
        let pid = std::process::id();
        let image_name = resolve_image_name(&proc_root, pid)?;

        Ok(Self::with_roots(proc_root, "/sys", pid, image_name))
    }

    #[cfg(not(target_os = "linux"))]
    pub fn host() -> StressResult<Self> {
        Err(StressError::Unsupported(
            "process memory counters are only available through Linux procfs",
        ))
    }

    pub fn with_roots(
        proc_root: impl Into<PathBuf>,
        sys_root: impl Into<PathBuf>,
        pid: Pid,
        image_name: impl Into<String>,
    ) -> Self {
        Self {
            proc_root: proc_root.into(),
            sys_root: sys_root.into(),
            pid,
            image_name: image_name.into(),
        }
    }
}

/// Image name of `pid` as the by-name lookup sees it
///
/// `comm` holds the name the process was invoked as, which differs from the
/// executable file name when launched through a symlink. The executable name
/// is only a fallback for when `comm` cannot be read.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
pub(crate) fn resolve_image_name(proc_root: &Path, pid: Pid) -> StressResult<String> {
    let comm_path = proc_root.join(pid.to_string()).join("comm");

    match std::fs::read_to_string(&comm_path) {
        Ok(comm) => Ok(comm.trim_end_matches('\n').to_string()),
        Err(err) => std::env::current_exe()
            .ok()
            .and_then(|exe| exe.file_name().map(|name| name.to_string_lossy().into_owned()))
            .ok_or_else(|| StressError::procfs(&comm_path, err)),
    }
}

impl MemoryCounters for ProcfsCounters {
    fn system_memory(&self) -> StressResult<SystemMemory> {
        read_system_memory(&self.proc_root, &self.sys_root)
    }

    fn process_memory(&self) -> StressResult<ProcessMemory> {
        let status = read_status(&self.proc_root, self.pid)?;

        let named = find_process_by_name(&self.proc_root, &self.image_name, self.pid)?;
        let private_working_set_bytes = read_private_working_set(&self.proc_root, named)?;

        Ok(ProcessMemory {
            paged_bytes: status.vm_swap,
            paged_system_bytes: status.vm_swap,
            private_bytes: status.vm_data,
            virtual_bytes: status.vm_size,
            working_set_bytes: status.vm_rss,
            peak_paged_bytes: status.vm_peak,
            peak_working_set_bytes: status.vm_hwm,
            private_working_set_bytes,
        })
    }
}
