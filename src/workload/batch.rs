/*!
 * Garbage Batch
 *
 * One iteration of a work unit: random integers, joined to text, split and
 * parsed back. The joined string is the peak allocation and the bulk of the
 * garbage.
 */

use crate::core::errors::{StressError, StressResult};
use crate::core::limits::DELIMITER;
use crate::core::types::{Sequence, TaskIndex};
use crate::workload::WorkloadConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of one iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iteration {
    pub parsed: Sequence,
    pub retain: bool,
}

/// A work unit's private random stream and the iteration it drives
pub struct GarbageTask {
    index: TaskIndex,
    rng: StdRng,
    sequence_length: usize,
    retention_probability: f64,
}

impl GarbageTask {
    /// Seeded by index, so a task's values repeat across runs
    pub fn new(index: TaskIndex, config: &WorkloadConfig) -> Self {
        Self {
            index,
            rng: StdRng::seed_from_u64(index as u64),
            sequence_length: config.sequence_length,
            retention_probability: config.retention_probability,
        }
    }

    pub fn index(&self) -> TaskIndex {
        self.index
    }

    /// Allocate, serialize, parse, then decide whether to keep the result
    pub fn next_iteration(&mut self) -> StressResult<Iteration> {
        let source = random_sequence(&mut self.rng, self.sequence_length);
        let text = serialize(&source);
        drop(source);

        let parsed = parse(&text)?;
        drop(text);

        let retain = self.rng.gen::<f64>() < self.retention_probability;
        Ok(Iteration { parsed, retain })
    }
}

/// Non-negative integers below `i32::MAX`
pub fn random_sequence<R: Rng>(rng: &mut R, length: usize) -> Sequence {
    (0..length).map(|_| rng.gen_range(0..i32::MAX)).collect()
}

/// Decimal text of every element joined with the delimiter
pub fn serialize(sequence: &[i32]) -> String {
    let pieces: Vec<String> = sequence.iter().map(i32::to_string).collect();
    pieces.join(DELIMITER)
}

/// Inverse of [`serialize`]
pub fn parse(text: &str) -> StressResult<Sequence> {
    if text.is_empty() {
        return Ok(Sequence::new());
    }

    text.split(DELIMITER)
        .map(|piece| {
            piece.parse::<i32>().map_err(|source| StressError::Parse {
                piece: piece.to_string(),
                source,
            })
        })
        .collect()
}
