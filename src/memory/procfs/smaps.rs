/*!
 * Private Working Set
 * Resolve a process by image name and sum its private resident pages
 */

use super::{parse_kb, read_file};
use crate::core::errors::{StressError, StressResult};
use crate::core::types::{Bytes, Pid};
use std::path::{Path, PathBuf};

/// Kernel truncates `comm` to TASK_COMM_LEN - 1 bytes
const COMM_MAX_LEN: usize = 15;

/// Find a pid whose `comm` matches `name`
///
/// Several processes may share an image name; `preferred` wins when it is one of
/// them, otherwise the lowest matching pid is returned.
pub fn find_process_by_name(root: &Path, name: &str, preferred: Pid) -> StressResult<Pid> {
    let wanted = truncate_comm(name);
    let entries = std::fs::read_dir(root).map_err(|err| StressError::procfs(root, err))?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| StressError::procfs(root, err))?;
        let Some(pid) = entry
            .file_name()
            .to_str()
            .and_then(|name| name.parse::<Pid>().ok())
        else {
            continue;
        };

        // Processes can exit between listing and reading.
        let Ok(comm) = std::fs::read_to_string(entry.path().join("comm")) else {
            continue;
        };

        if comm.trim_end_matches('\n') == wanted {
            matches.push(pid);
        }
    }

    if matches.contains(&preferred) {
        return Ok(preferred);
    }

    matches
        .into_iter()
        .min()
        .ok_or_else(|| StressError::ProcessNotFound(name.to_string()))
}

/// `Private_Clean + Private_Dirty` from /proc/<pid>/smaps_rollup
pub fn read_private_working_set(root: &Path, pid: Pid) -> StressResult<Bytes> {
    let path = root.join(pid.to_string()).join("smaps_rollup");
    let content = read_file(&path)?;
    parse_private_working_set(&content, &path)
}

fn parse_private_working_set(content: &str, path: &Path) -> StressResult<Bytes> {
    let mut clean = None;
    let mut dirty = None;

    for line in content.lines() {
        if let Some(value) = line.strip_prefix("Private_Clean:") {
            clean = Some(parse_kb("Private_Clean", value, path)?);
        } else if let Some(value) = line.strip_prefix("Private_Dirty:") {
            dirty = Some(parse_kb("Private_Dirty", value, path)?);
        }
    }

    match (clean, dirty) {
        (Some(clean), Some(dirty)) => Ok(clean + dirty),
        (None, _) => Err(StressError::MissingField {
            field: "Private_Clean",
            path: PathBuf::from(path),
        }),
        (_, None) => Err(StressError::MissingField {
            field: "Private_Dirty",
            path: PathBuf::from(path),
        }),
    }
}

fn truncate_comm(name: &str) -> &str {
    if name.len() <= COMM_MAX_LEN {
        return name;
    }

    let mut end = COMM_MAX_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}
