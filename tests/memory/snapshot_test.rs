/*!
 * Snapshot Tests
 * Live allocator and procfs capture on the running process
 */

#![cfg(all(target_os = "linux", feature = "jemalloc"))]

use heap_stress::memory::{Collector, MemoryCounters, MemoryProbe, SystemProbe};
use heap_stress::{StressRun, WorkloadConfig};
use serial_test::serial;

#[test]
#[serial]
fn test_capture_reads_every_counter() {
    let probe = SystemProbe::new().unwrap();
    let snapshot = probe.capture().unwrap();

    assert!(snapshot.allocator.allocated_bytes > 0);
    assert!(snapshot.allocator.heap_size_bytes >= snapshot.allocator.allocated_bytes);
    assert!(snapshot.allocator.committed_bytes > 0);
    assert!(snapshot.system.total_available_bytes > 0);
    assert!(snapshot.process.working_set_bytes > 0);
    assert!(snapshot.process.virtual_bytes >= snapshot.process.working_set_bytes);
    assert!(snapshot.process.peak_working_set_bytes >= snapshot.process.working_set_bytes);
    assert!(snapshot.process.private_working_set_bytes > 0);
}

#[test]
#[serial]
fn test_collection_never_grows_the_heap() {
    let probe = SystemProbe::new().unwrap();

    let retained: Vec<Vec<i32>> = (0..64).map(|i| vec![i; 64 * 1024]).collect();
    let garbage: Vec<Vec<u8>> = (0..256).map(|i| vec![i as u8; 16 * 1024]).collect();
    drop(garbage);

    let without = probe.allocator_state().unwrap();
    probe.collect().unwrap();
    let with = probe.allocator_state().unwrap();

    assert!(
        with.heap_size_bytes <= without.heap_size_bytes,
        "heap grew from {} to {} bytes",
        without.heap_size_bytes,
        with.heap_size_bytes
    );
    assert!(retained.iter().all(|sequence| sequence.len() == 64 * 1024));
}

#[test]
#[serial]
fn test_retained_sequences_are_visible_to_the_allocator() {
    let probe = SystemProbe::new().unwrap();
    let before = probe.capture().unwrap();

    // 32 sequences of 256 KiB each
    let retained: Vec<Vec<i32>> = (0..32).map(|i| vec![i; 64 * 1024]).collect();
    let after = probe.capture().unwrap();

    // Small slack for thread caches flushed by the second collection
    assert!(after.allocator.allocated_bytes >= before.allocator.allocated_bytes + 7 * 1024 * 1024);
    drop(retained);
}

#[test]
#[serial]
fn test_host_counters_match_procfs() {
    let probe = SystemProbe::new().unwrap();

    let system = probe.system_memory().unwrap();
    let process = probe.process_memory().unwrap();

    assert!(system.high_memory_load_threshold_bytes() < system.total_available_bytes);
    assert!(process.peak_paged_bytes >= process.virtual_bytes);
}

#[test]
#[serial]
fn test_scaled_run_on_live_probe() {
    let config = WorkloadConfig {
        tasks: 8,
        iterations: 10,
        sequence_length: 1_000,
        retention_probability: 0.5,
    };
    let run = StressRun::new(SystemProbe::new().unwrap(), config);

    let mut out = Vec::new();
    let summary = run.run(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(output.matches("Memory statistics:").count(), 2);
    assert!(output.contains(&format!("- Kept {} objects alive", summary.retained)));
    assert!(summary.after.allocator.allocated_bytes > 0);
}
