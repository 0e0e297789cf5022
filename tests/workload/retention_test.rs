/*!
 * Retention Tests
 * Parallel generation keeps about 1% of parsed sequences
 */

use heap_stress::workload::{GarbageGenerator, RetainedSet, WorkloadConfig};

fn scaled_config(sequence_length: usize) -> WorkloadConfig {
    WorkloadConfig {
        sequence_length,
        ..Default::default()
    }
}

#[test]
fn test_retained_count_is_near_one_percent() {
    let generator = GarbageGenerator::new(scaled_config(16));
    let kept = generator.generate().unwrap();

    // Binomial(10_000, 0.01): mean 100, standard deviation ~9.9
    assert!(
        (50..=150).contains(&kept.len()),
        "retained {} sequences, expected about 100",
        kept.len()
    );
}

#[test]
fn test_every_retained_sequence_has_full_length() {
    let generator = GarbageGenerator::new(scaled_config(257));
    let kept = generator.generate().unwrap();

    assert!(!kept.is_empty());
    assert!(kept.iter().all(|sequence| sequence.len() == 257));
}

#[test]
fn test_parallel_runs_retain_the_same_multiset() {
    let generator = GarbageGenerator::new(scaled_config(8));

    let mut first = generator.generate().unwrap();
    let mut second = generator.generate().unwrap();
    first.sort();
    second.sort();

    assert_eq!(first, second);
}

#[test]
fn test_zero_probability_retains_nothing() {
    let config = WorkloadConfig {
        tasks: 8,
        iterations: 10,
        sequence_length: 4,
        retention_probability: 0.0,
    };

    assert!(GarbageGenerator::new(config).generate().unwrap().is_empty());
}

#[test]
fn test_certain_retention_keeps_every_iteration() {
    let config = WorkloadConfig {
        tasks: 8,
        iterations: 10,
        sequence_length: 4,
        retention_probability: 1.0,
    };
    let generator = GarbageGenerator::new(config);

    let retained = RetainedSet::new();
    generator.run_task(3, &retained).unwrap();
    assert_eq!(retained.into_vec().len(), 10);

    assert_eq!(generator.generate().unwrap().len(), 80);
}
