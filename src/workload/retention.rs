/*!
 * Retained Set
 * Append-only, unordered collection shared by every work unit
 */

use crate::core::types::Sequence;
use crossbeam_queue::SegQueue;

/// Lock-free sink for sequences kept alive on purpose
///
/// Writers only push while the workload runs; the set is read once, after
/// every writer has joined, by consuming it.
#[derive(Debug, Default)]
pub struct RetainedSet {
    queue: SegQueue<Sequence>,
}

impl RetainedSet {
    pub fn new() -> Self {
        Self {
            queue: SegQueue::new(),
        }
    }

    pub fn insert(&self, sequence: Sequence) {
        self.queue.push(sequence);
    }

    /// Drain into a plain vector; order is unspecified
    pub fn into_vec(self) -> Vec<Sequence> {
        let mut sequences = Vec::with_capacity(self.queue.len());
        while let Some(sequence) = self.queue.pop() {
            sequences.push(sequence);
        }
        sequences
    }
}
