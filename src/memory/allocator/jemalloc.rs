/*!
 * jemalloc Collector
 * Global allocator, forced purge and statistics through mallctl
 */

use crate::core::errors::{StressError, StressResult};
use crate::memory::traits::Collector;
use crate::memory::types::{AllocatorState, CollectorMode};
use std::ffi::c_char;
use std::ptr;
use tikv_jemalloc_ctl::{background_thread, epoch, stats};
use tracing::{debug, warn};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

// C string should end with a '\0'.
const TCACHE_FLUSH: &str = "thread.tcache.flush\0";
// 4096 is MALLCTL_ARENAS_ALL: purge every arena in one call.
const ARENAS_PURGE: &str = "arena.4096.purge\0";

/// Collector backed by the jemalloc global allocator
#[derive(Debug, Default, Clone, Copy)]
pub struct JemallocCollector;

impl JemallocCollector {
    pub fn new() -> Self {
        Self
    }
}

/// Invoke a mallctl that neither reads nor writes a value
fn invoke(name: &'static str) -> StressResult<()> {
    let code = unsafe {
        tikv_jemalloc_sys::mallctl(
            name.as_ptr() as *const c_char,
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
            0,
        )
    };

    if code != 0 {
        return Err(StressError::AllocatorControl {
            control: name.trim_end_matches('\0'),
            code,
        });
    }

    Ok(())
}

fn read_stat(
    stat: &'static str,
    read: fn() -> tikv_jemalloc_ctl::Result<usize>,
) -> StressResult<u64> {
    read()
        .map(|value| value as u64)
        .map_err(|err| StressError::AllocatorStat {
            stat,
            message: err.to_string(),
        })
}

/// Flush the calling thread's cache and the cache of every rayon pool thread
///
/// Work units allocate on the pool, so their cached blocks would otherwise
/// survive the purge. Fails per thread only when its cache is disabled, which
/// is logged and skipped. Returns how many caches were flushed.
fn flush_thread_caches() -> usize {
    let mut results = rayon::broadcast(|_| invoke(TCACHE_FLUSH));
    results.push(invoke(TCACHE_FLUSH));

    results
        .into_iter()
        .filter(|result| match result {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Thread cache flush skipped");
                false
            }
        })
        .count()
}

/// Refresh the cached statistics; jemalloc only updates them on epoch advance
fn refresh() -> StressResult<()> {
    epoch::advance()
        .map(|_| ())
        .map_err(|err| StressError::AllocatorStat {
            stat: "epoch",
            message: err.to_string(),
        })
}

impl Collector for JemallocCollector {
    fn collect(&self) -> StressResult<()> {
        refresh()?;
        let resident_before = read_stat("stats.resident", stats::resident::read)?;

        let flushed = flush_thread_caches();
        invoke(ARENAS_PURGE)?;

        refresh()?;
        let resident_after = read_stat("stats.resident", stats::resident::read)?;
        debug!(
            resident_before,
            resident_after,
            flushed,
            reclaimed = resident_before.saturating_sub(resident_after),
            "Forced full collection"
        );

        Ok(())
    }

    fn allocator_state(&self) -> StressResult<AllocatorState> {
        refresh()?;

        Ok(AllocatorState {
            allocated_bytes: read_stat("stats.allocated", stats::allocated::read)?,
            heap_size_bytes: read_stat("stats.active", stats::active::read)?,
            committed_bytes: read_stat("stats.resident", stats::resident::read)?,
        })
    }

    fn mode(&self) -> StressResult<CollectorMode> {
        let enabled = background_thread::read().map_err(|err| StressError::AllocatorStat {
            stat: "background_thread",
            message: err.to_string(),
        })?;

        Ok(if enabled {
            CollectorMode::Server
        } else {
            CollectorMode::Workstation
        })
    }
}
