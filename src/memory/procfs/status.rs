/*!
 * Process Status
 * `VmXxx` counters from /proc/<pid>/status
 */

use super::{parse_kb, read_file};
use crate::core::errors::{StressError, StressResult};
use crate::core::types::{Bytes, Pid};
use std::path::{Path, PathBuf};

/// Memory counters of one process as the kernel reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessStatus {
    pub vm_peak: Bytes,
    pub vm_size: Bytes,
    pub vm_hwm: Bytes,
    pub vm_rss: Bytes,
    pub vm_data: Bytes,
    pub vm_swap: Bytes,
}

pub fn read_status(root: &Path, pid: Pid) -> StressResult<ProcessStatus> {
    let path = root.join(pid.to_string()).join("status");
    let content = read_file(&path)?;
    parse_status(&content, &path)
}

fn parse_status(content: &str, path: &Path) -> StressResult<ProcessStatus> {
    let mut vm_peak = None;
    let mut vm_size = None;
    let mut vm_hwm = None;
    let mut vm_rss = None;
    let mut vm_data = None;
    let mut vm_swap = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let (field, slot) = match key {
            "VmPeak" => ("VmPeak", &mut vm_peak),
            "VmSize" => ("VmSize", &mut vm_size),
            "VmHWM" => ("VmHWM", &mut vm_hwm),
            "VmRSS" => ("VmRSS", &mut vm_rss),
            "VmData" => ("VmData", &mut vm_data),
            "VmSwap" => ("VmSwap", &mut vm_swap),
            _ => continue,
        };

        *slot = Some(parse_kb(field, value, path)?);
    }

    let require = |field: &'static str, value: Option<Bytes>| {
        value.ok_or_else(|| StressError::MissingField {
            field,
            path: PathBuf::from(path),
        })
    };

    Ok(ProcessStatus {
        vm_peak: require("VmPeak", vm_peak)?,
        vm_size: require("VmSize", vm_size)?,
        vm_hwm: require("VmHWM", vm_hwm)?,
        vm_rss: require("VmRSS", vm_rss)?,
        vm_data: require("VmData", vm_data)?,
        vm_swap: require("VmSwap", vm_swap)?,
    })
}
