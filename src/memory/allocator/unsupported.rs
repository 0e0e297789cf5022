/*!
 * Unsupported Collector
 * Stand-in when the build carries no allocator with statistics
 */

use crate::core::errors::{StressError, StressResult};
use crate::memory::traits::Collector;
use crate::memory::types::{AllocatorState, CollectorMode};

const REASON: &str = "allocator statistics require the `jemalloc` feature on a non-MSVC target";

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedCollector;

impl UnsupportedCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Collector for UnsupportedCollector {
    fn collect(&self) -> StressResult<()> {
        Err(StressError::Unsupported(REASON))
    }

    fn allocator_state(&self) -> StressResult<AllocatorState> {
        Err(StressError::Unsupported(REASON))
    }

    fn mode(&self) -> StressResult<CollectorMode> {
        Err(StressError::Unsupported(REASON))
    }
}
