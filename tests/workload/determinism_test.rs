/*!
 * Workload Determinism Tests
 * Per-task seeding and the serialize/parse round trip
 */

use heap_stress::core::limits::{
    ITERATIONS_PER_TASK, RETENTION_PROBABILITY, SEQUENCE_LENGTH, TASK_COUNT,
};
use heap_stress::workload::{parse, random_sequence, serialize, GarbageTask, WorkloadConfig};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn small_config() -> WorkloadConfig {
    WorkloadConfig {
        sequence_length: 32,
        ..Default::default()
    }
}

#[test]
fn test_default_config_uses_fixed_constants() {
    let config = WorkloadConfig::default();

    assert_eq!(config.tasks, TASK_COUNT);
    assert_eq!(config.iterations, ITERATIONS_PER_TASK);
    assert_eq!(config.sequence_length, SEQUENCE_LENGTH);
    assert_eq!(config.retention_probability, RETENTION_PROBABILITY);
    assert_eq!(config.total_iterations(), 10_000);
    assert!((config.expected_retained() - 100.0).abs() < 1e-9);
}

#[test]
fn test_every_task_repeats_its_values_and_decisions() {
    let config = small_config();

    for index in 0..config.tasks {
        let mut first = GarbageTask::new(index, &config);
        let mut second = GarbageTask::new(index, &config);

        for _ in 0..config.iterations {
            assert_eq!(
                first.next_iteration().unwrap(),
                second.next_iteration().unwrap(),
                "task {index} diverged"
            );
        }
    }
}

#[test]
fn test_tasks_draw_distinct_streams() {
    let config = small_config();

    let a = GarbageTask::new(0, &config).next_iteration().unwrap();
    let b = GarbageTask::new(1, &config).next_iteration().unwrap();

    assert_ne!(a.parsed, b.parsed);
}

#[test]
fn test_round_trip_preserves_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let original = random_sequence(&mut rng, SEQUENCE_LENGTH);

    let text = serialize(&original);
    assert_eq!(text.matches(';').count(), SEQUENCE_LENGTH - 1);

    let parsed = parse(&text).unwrap();
    assert_eq!(parsed, original);
}
