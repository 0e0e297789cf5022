/*!
 * Host Memory
 * /proc/meminfo totals, or the enclosing cgroup's limit and usage when that
 * limit is below the host total
 */

use super::{parse_kb, read_file};
use crate::core::errors::{StressError, StressResult};
use crate::core::limits::CGROUP_UNLIMITED;
use crate::core::types::Bytes;
use crate::memory::types::SystemMemory;
use std::path::{Path, PathBuf};
use tracing::debug;

/// (limit, usage) file pairs: cgroup v2 first, then v1
const CGROUP_FILES: [(&str, &str); 2] = [
    ("fs/cgroup/memory.max", "fs/cgroup/memory.current"),
    (
        "fs/cgroup/memory/memory.limit_in_bytes",
        "fs/cgroup/memory/memory.usage_in_bytes",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CgroupMemory {
    limit: Bytes,
    usage: Option<Bytes>,
}

pub fn read_system_memory(proc_root: &Path, sys_root: &Path) -> StressResult<SystemMemory> {
    let path = proc_root.join("meminfo");
    let content = read_file(&path)?;
    let (total, available) = parse_meminfo(&content, &path)?;
    let host_load = total.saturating_sub(available);

    // Load and total must describe the same pool, or load could exceed total.
    let (total_available_bytes, memory_load_bytes) = match cgroup_memory(sys_root) {
        Some(cgroup) if cgroup.limit < total => {
            (cgroup.limit, cgroup.usage.unwrap_or(host_load))
        }
        _ => (total, host_load),
    };

    Ok(SystemMemory {
        total_available_bytes,
        memory_load_bytes,
    })
}

fn parse_meminfo(content: &str, path: &Path) -> StressResult<(Bytes, Bytes)> {
    let mut total = None;
    let mut available = None;

    for line in content.lines() {
        if let Some(value) = line.strip_prefix("MemTotal:") {
            total = Some(parse_kb("MemTotal", value, path)?);
        } else if let Some(value) = line.strip_prefix("MemAvailable:") {
            available = Some(parse_kb("MemAvailable", value, path)?);
        }
    }

    let total = total.ok_or_else(|| StressError::MissingField {
        field: "MemTotal",
        path: PathBuf::from(path),
    })?;
    let available = available.ok_or_else(|| StressError::MissingField {
        field: "MemAvailable",
        path: PathBuf::from(path),
    })?;

    Ok((total, available))
}

/// Memory limit and current usage of the enclosing cgroup, if limited
///
/// A missing or unlimited cgroup is not an error: the host counters apply.
fn cgroup_memory(sys_root: &Path) -> Option<CgroupMemory> {
    for (limit_file, usage_file) in CGROUP_FILES {
        let Ok(content) = std::fs::read_to_string(sys_root.join(limit_file)) else {
            continue;
        };

        let value = content.trim();
        if value == CGROUP_UNLIMITED {
            return None;
        }

        match value.parse::<Bytes>() {
            Ok(limit) => {
                return Some(CgroupMemory {
                    limit,
                    usage: cgroup_usage(sys_root, usage_file),
                })
            }
            Err(err) => {
                debug!(file = limit_file, value, %err, "Ignoring unparsable cgroup memory limit");
            }
        }
    }

    None
}

fn cgroup_usage(sys_root: &Path, file: &str) -> Option<Bytes> {
    let content = std::fs::read_to_string(sys_root.join(file)).ok()?;
    let value = content.trim();

    match value.parse::<Bytes>() {
        Ok(usage) => Some(usage),
        Err(err) => {
            debug!(file, value, %err, "Ignoring unparsable cgroup memory usage");
            None
        }
    }
}
